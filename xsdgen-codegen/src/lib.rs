//! Shared code generation utilities for the xsdgen code generator.
//!
//! This crate provides the language-agnostic layer used by language-specific
//! generators:
//!
//! - [`LanguageCodegen`] - the generator trait with optional per-declaration
//!   handlers, plus the [`generate`] driver loop
//! - [`resolve_base`] / [`native_type`] - alias resolution against a parsed
//!   schema and mapping to native type spellings
//! - [`schema_files`] / [`prepare_output_dir`] / [`is_remote`] /
//!   [`fetch_schema`] - schema source discovery and retrieval

mod codegen;
mod resolver;
mod source;

pub use codegen::{LanguageCodegen, generate};
pub use resolver::{native_type, resolve_base};
pub use source::{fetch_schema, is_remote, prepare_output_dir, schema_files};
