//! Parsed schema declaration types for the xsdgen code generator.
//!
//! This crate provides the unified in-memory representation of XSD schema
//! constructs. The parser lowers raw schema documents into these types, and
//! the code generators consume them without ever touching XML again.
//!
//! # Architecture
//!
//! ```text
//! schema.xsd → parser (lowering) → xsdgen-ir (declarations) → codegen
//! ```
//!
//! The declaration types are designed to be:
//! - Target-language agnostic (no Go/TypeScript/C/Java/Rust-specific concerns)
//! - Self-contained (no external dependencies beyond serde)

mod declaration;

pub use declaration::{
    Attribute, AttributeGroup, ComplexType, Declaration, DeclarationKind, Element, Group,
    SimpleType,
};
