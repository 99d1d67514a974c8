//! Type reference resolution against a parsed schema.

use xsdgen_core::{Lang, builtin_type, local_name};
use xsdgen_ir::Declaration;

/// Resolve a type name to its base type by scanning the declarations.
///
/// The scan runs in caller-supplied order and the first match wins: an
/// atomic simple type (neither list nor union) yields its base, a top-level
/// attribute or element yields its declared type. Anything else, including
/// an unknown name, yields the input unchanged.
///
/// This performs exactly one hop of alias resolution; deeper chains require
/// re-invoking with the result. Duplicate names are not detected, and no
/// cycle protection is attempted.
pub fn resolve_base<'a>(name: &'a str, declarations: &'a [Declaration]) -> &'a str {
    for decl in declarations {
        match decl {
            Declaration::SimpleType(st) if !st.is_list && !st.is_union && st.name == name => {
                return &st.base;
            }
            Declaration::Attribute(attr) if attr.name == name => return &attr.type_name,
            Declaration::Element(elem) if elem.name == name => return &elem.type_name,
            _ => {}
        }
    }
    name
}

/// Map a referenced type name to its native spelling in the target language.
///
/// This is the composition every generator performs when it meets a type
/// reference: strip the namespace prefix, follow one alias hop through the
/// declarations, and look the result up in the built-in table. `None` means
/// the name resolves to another declaration rather than a built-in, and the
/// generator should reference the generated type of that name instead.
pub fn native_type(name: &str, lang: Lang, declarations: &[Declaration]) -> Option<&'static str> {
    let base = resolve_base(local_name(name), declarations);
    builtin_type(local_name(base), lang)
}

#[cfg(test)]
mod tests {
    use xsdgen_ir::{Attribute, Element, SimpleType};

    use super::*;

    fn simple_type(name: &str, base: &str) -> Declaration {
        Declaration::SimpleType(SimpleType {
            name: name.into(),
            base: base.into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_resolve_simple_type_base() {
        let declarations = vec![simple_type("Foo", "string")];
        assert_eq!(resolve_base("Foo", &declarations), "string");
    }

    #[test]
    fn test_resolve_unmatched_name_unchanged() {
        assert_eq!(resolve_base("Bar", &[]), "Bar");

        let declarations = vec![simple_type("Foo", "string")];
        assert_eq!(resolve_base("Bar", &declarations), "Bar");
    }

    #[test]
    fn test_list_and_union_simple_types_never_match() {
        let declarations = vec![
            Declaration::SimpleType(SimpleType {
                name: "Tokens".into(),
                base: "token".into(),
                is_list: true,
                ..Default::default()
            }),
            Declaration::SimpleType(SimpleType {
                name: "IntOrName".into(),
                base: "int".into(),
                is_union: true,
                ..Default::default()
            }),
        ];
        assert_eq!(resolve_base("Tokens", &declarations), "Tokens");
        assert_eq!(resolve_base("IntOrName", &declarations), "IntOrName");
    }

    #[test]
    fn test_resolve_attribute_and_element_types() {
        let declarations = vec![
            Declaration::Attribute(Attribute {
                name: "lang".into(),
                type_name: "language".into(),
                ..Default::default()
            }),
            Declaration::Element(Element {
                name: "title".into(),
                type_name: "string".into(),
                ..Default::default()
            }),
        ];
        assert_eq!(resolve_base("lang", &declarations), "language");
        assert_eq!(resolve_base("title", &declarations), "string");
    }

    #[test]
    fn test_first_match_wins_across_kinds() {
        // Duplicate names are undefined territory; the scan takes whatever
        // comes first, regardless of declaration kind.
        let declarations = vec![
            Declaration::Element(Element {
                name: "Foo".into(),
                type_name: "int".into(),
                ..Default::default()
            }),
            simple_type("Foo", "string"),
        ];
        assert_eq!(resolve_base("Foo", &declarations), "int");
    }

    #[test]
    fn test_single_hop_only() {
        let declarations = vec![simple_type("Outer", "Inner"), simple_type("Inner", "string")];
        assert_eq!(resolve_base("Outer", &declarations), "Inner");
        assert_eq!(resolve_base(resolve_base("Outer", &declarations), &declarations), "string");
    }

    #[test]
    fn test_native_type_through_alias() {
        let declarations = vec![simple_type("ISBN", "xs:token")];
        assert_eq!(native_type("ns:ISBN", Lang::Go, &declarations), Some("string"));
        assert_eq!(native_type("ns:ISBN", Lang::Java, &declarations), Some("String"));
    }

    #[test]
    fn test_native_type_direct_builtin() {
        assert_eq!(native_type("xs:long", Lang::Rust, &[]), Some("i64"));
        assert_eq!(native_type("boolean", Lang::C, &[]), Some("bool"));
    }

    #[test]
    fn test_native_type_unresolved_reference() {
        let declarations = vec![simple_type("Foo", "Bar")];
        assert_eq!(native_type("Foo", Lang::Rust, &declarations), None);
    }
}
