//! Schema declaration types.
//!
//! A parsed schema is a flat, ordered collection of [`Declaration`] values.
//! Order is whatever the parser produced; consumers scan it linearly and
//! rely on first-match-wins when names collide.

use serde::{Deserialize, Serialize};

/// A single top-level schema construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Declaration {
    /// A restricted or derived data type with a base type reference.
    SimpleType(SimpleType),
    /// A structured type with child elements and attributes.
    ComplexType(ComplexType),
    /// A named group of elements reusable across complex types.
    Group(Group),
    /// A named group of attributes reusable across complex types.
    AttributeGroup(AttributeGroup),
    /// A top-level element declaration.
    Element(Element),
    /// A top-level attribute declaration.
    Attribute(Attribute),
}

impl Declaration {
    /// The declared name, which may carry a namespace prefix (e.g. `xs:token`).
    pub fn name(&self) -> &str {
        match self {
            Declaration::SimpleType(decl) => &decl.name,
            Declaration::ComplexType(decl) => &decl.name,
            Declaration::Group(decl) => &decl.name,
            Declaration::AttributeGroup(decl) => &decl.name,
            Declaration::Element(decl) => &decl.name,
            Declaration::Attribute(decl) => &decl.name,
        }
    }

    /// The kind of schema construct this declaration represents.
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::SimpleType(_) => DeclarationKind::SimpleType,
            Declaration::ComplexType(_) => DeclarationKind::ComplexType,
            Declaration::Group(_) => DeclarationKind::Group,
            Declaration::AttributeGroup(_) => DeclarationKind::AttributeGroup,
            Declaration::Element(_) => DeclarationKind::Element,
            Declaration::Attribute(_) => DeclarationKind::Attribute,
        }
    }
}

/// Discriminant for [`Declaration`], used for reporting and driver bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationKind {
    SimpleType,
    ComplexType,
    Group,
    AttributeGroup,
    Element,
    Attribute,
}

impl DeclarationKind {
    /// Get the XSD spelling of this construct (e.g. `simpleType`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::SimpleType => "simpleType",
            DeclarationKind::ComplexType => "complexType",
            DeclarationKind::Group => "group",
            DeclarationKind::AttributeGroup => "attributeGroup",
            DeclarationKind::Element => "element",
            DeclarationKind::Attribute => "attribute",
        }
    }
}

/// A restricted or derived data type (`<xs:simpleType>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleType {
    /// Declared type name.
    pub name: String,
    /// Base type reference: a built-in name or another declaration's name.
    pub base: String,
    /// True for `<xs:list>` derivations.
    pub is_list: bool,
    /// True for `<xs:union>` derivations.
    pub is_union: bool,
    /// Member type names of a union derivation.
    pub member_types: Vec<String>,
    /// Documentation text from `<xs:annotation>`.
    pub doc: Option<String>,
}

/// A structured type (`<xs:complexType>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexType {
    /// Declared type name.
    pub name: String,
    /// Base type reference for extension/restriction derivations.
    pub base: Option<String>,
    /// Child element declarations.
    pub elements: Vec<Element>,
    /// Attribute declarations.
    pub attributes: Vec<Attribute>,
    /// Referenced element groups.
    pub groups: Vec<Group>,
    /// Documentation text from `<xs:annotation>`.
    pub doc: Option<String>,
}

/// A reusable group of elements (`<xs:group>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Declared group name, or the referenced group's name for `ref=` uses.
    pub name: String,
    /// True when this use is a reference to a named top-level group.
    pub is_ref: bool,
    /// True when the enclosing particle allows more than one occurrence.
    pub plural: bool,
    /// Child element declarations.
    pub elements: Vec<Element>,
    /// Nested group uses.
    pub groups: Vec<Group>,
    /// Documentation text from `<xs:annotation>`.
    pub doc: Option<String>,
}

/// A reusable group of attributes (`<xs:attributeGroup>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeGroup {
    /// Declared group name, or the referenced group's name for `ref=` uses.
    pub name: String,
    /// True when this use is a reference to a named top-level group.
    pub is_ref: bool,
    /// Attribute declarations.
    pub attributes: Vec<Attribute>,
    /// Documentation text from `<xs:annotation>`.
    pub doc: Option<String>,
}

/// An element declaration (`<xs:element>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Declared element name.
    pub name: String,
    /// Type reference: a built-in name or another declaration's name.
    pub type_name: String,
    /// True when `maxOccurs` allows more than one occurrence.
    pub plural: bool,
    /// True when `minOccurs` is zero.
    pub optional: bool,
    /// Documentation text from `<xs:annotation>`.
    pub doc: Option<String>,
}

/// An attribute declaration (`<xs:attribute>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Declared attribute name.
    pub name: String,
    /// Type reference: a built-in name or another declaration's name.
    pub type_name: String,
    /// True unless `use="required"`.
    pub optional: bool,
    /// Documentation text from `<xs:annotation>`.
    pub doc: Option<String>,
}
