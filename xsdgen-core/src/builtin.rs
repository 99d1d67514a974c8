//! Built-in XSD data type mappings.
//!
//! The table below fixes the correspondence between the XSD built-in data
//! types and their native spellings in the five target languages. See
//! <https://www.w3.org/TR/xmlschema-2/#datatype> for the source set.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::Lang;

/// Native spellings for one built-in, in [`Lang`] column order
/// (Go, TypeScript, C, Java, Rust).
type Spellings = [&'static str; 5];

#[rustfmt::skip]
static BUILTIN_TYPES: Lazy<IndexMap<&'static str, Spellings>> = Lazy::new(|| {
    IndexMap::from([
        ("anyType",            ["string", "string", "char", "String", "char"]),
        ("ENTITIES",           ["[]string", "Array<string>", "char[]", "List<String>", "Vec<char>"]),
        ("ENTITY",             ["string", "string", "char", "String", "char"]),
        ("ID",                 ["string", "string", "char", "String", "char"]),
        ("IDREF",              ["string", "string", "char", "String", "char"]),
        ("IDREFS",             ["[]string", "Array<string>", "char[]", "List<String>", "Vec<char>"]),
        ("NCName",             ["string", "string", "char", "String", "char"]),
        ("NMTOKEN",            ["string", "string", "char", "String", "char"]),
        ("NMTOKENS",           ["[]string", "Array<string>", "char[]", "List<String>", "Vec<char>"]),
        ("NOTATION",           ["[]string", "Array<string>", "char[]", "List<String>", "Vec<char>"]),
        ("Name",               ["string", "string", "char", "String", "char"]),
        ("QName",              ["xml.Name", "any", "char", "String", "char"]),
        ("anyURI",             ["string", "string", "char", "QName", "char"]),
        ("base64Binary",       ["[]byte", "Array<any>", "char[]", "List<Byte>", "Vec<u8>"]),
        ("boolean",            ["bool", "boolean", "bool", "Boolean", "bool"]),
        ("byte",               ["byte", "any", "char[]", "Byte", "&[u8]"]),
        ("date",               ["time.Time", "string", "char", "Byte", "&[u8]"]),
        ("dateTime",           ["time.Time", "string", "char", "Byte", "&[u8]"]),
        ("decimal",            ["float64", "number", "float", "Float", "f64"]),
        ("double",             ["float64", "number", "float", "Float", "f64"]),
        ("duration",           ["string", "string", "char", "String", "char"]),
        ("float",              ["float", "number", "float", "Float", "usize"]),
        ("gDay",               ["time.Time", "string", "char", "String", "char"]),
        ("gMonth",             ["time.Time", "string", "char", "String", "char"]),
        ("gMonthDay",          ["time.Time", "string", "char", "String", "char"]),
        ("gYear",              ["time.Time", "string", "char", "String", "char"]),
        ("gYearMonth",         ["time.Time", "string", "char", "String", "char"]),
        ("hexBinary",          ["[]byte", "Array<any>", "char[]", "List<Byte>", "Vec<u8>"]),
        ("int",                ["int", "number", "int", "Integer", "isize"]),
        ("integer",            ["int", "number", "int", "Integer", "isize"]),
        ("language",           ["string", "string", "char", "String", "char"]),
        ("long",               ["int64", "number", "int", "Long", "i64"]),
        ("negativeInteger",    ["int", "number", "int", "Integer", "isize"]),
        ("nonNegativeInteger", ["int", "number", "int", "Integer", "isize"]),
        ("normalizedString",   ["string", "string", "char", "String", "char"]),
        ("nonPositiveInteger", ["int", "number", "int", "Integer", "isize"]),
        ("positiveInteger",    ["int", "number", "int", "Integer", "isize"]),
        ("short",              ["int16", "number", "int", "Integer", "i16"]),
        ("string",             ["string", "string", "char", "String", "char"]),
        ("time",               ["time.Time", "string", "char", "String", "char"]),
        ("token",              ["string", "string", "char", "String", "char"]),
        ("unsignedByte",       ["byte", "any", "char", "Byte", "&[u8]"]),
        ("unsignedInt",        ["uint32", "number", "unsigned int", "Integer", "u32"]),
        ("unsignedLong",       ["uint64", "number", "unsigned int", "Long", "u64"]),
        ("unsignedShort",      ["uint16", "number", "unsigned int", "Short", "u16"]),
        ("xml:lang",           ["string", "string", "char", "String", "char"]),
        ("xml:space",          ["string", "string", "char", "String", "char"]),
        ("xml:base",           ["string", "string", "char", "String", "char"]),
        ("xml:id",             ["string", "string", "char", "String", "char"]),
    ])
});

/// Look up the native spelling of an XSD built-in type for a target language.
///
/// Returns `None` for names that are not built-ins; callers decide the
/// fallback, commonly treating the name as a reference to another
/// declaration in the schema.
pub fn builtin_type(name: &str, lang: Lang) -> Option<&'static str> {
    BUILTIN_TYPES.get(name).map(|spellings| spellings[lang.index()])
}

/// Iterate over all built-in type names, in table order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_TYPES.keys().copied()
}
