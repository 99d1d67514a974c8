//! Core types and built-in type mappings for the xsdgen code generator.
//!
//! This crate provides the fundamental building blocks used across the
//! xsdgen ecosystem: the target-language enum, the XSD built-in data type
//! table, and the name/namespace string utilities.

mod builtin;
mod lang;
mod utils;

// Built-in XSD data types
pub use builtin::{builtin_names, builtin_type};
// Target languages
pub use lang::Lang;
// String utilities
pub use utils::{capitalize_first, local_name, ns_prefix};
