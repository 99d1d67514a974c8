//! Language-agnostic code generation traits.

use eyre::Result;
use xsdgen_ir::{Attribute, AttributeGroup, ComplexType, Declaration, Element, Group, SimpleType};

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for rendering schema declarations in
/// a new language. Every declaration handler has a no-op default, so an
/// implementation overrides only the kinds it renders and the driver skips
/// the rest silently.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "rust", "typescript", "go")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "rs", "ts", "go")
    fn file_extension(&self) -> &'static str;

    /// Render a simple type declaration.
    fn simple_type(&mut self, _decl: &SimpleType) -> Result<()> {
        Ok(())
    }

    /// Render a complex type declaration.
    fn complex_type(&mut self, _decl: &ComplexType) -> Result<()> {
        Ok(())
    }

    /// Render an element group declaration.
    fn group(&mut self, _decl: &Group) -> Result<()> {
        Ok(())
    }

    /// Render an attribute group declaration.
    fn attribute_group(&mut self, _decl: &AttributeGroup) -> Result<()> {
        Ok(())
    }

    /// Render a top-level element declaration.
    fn element(&mut self, _decl: &Element) -> Result<()> {
        Ok(())
    }

    /// Render a top-level attribute declaration.
    fn attribute(&mut self, _decl: &Attribute) -> Result<()> {
        Ok(())
    }
}

/// Drive a generator over a parsed schema.
///
/// Declarations are visited in the supplied order and dispatched to the
/// matching handler. A handler error stops the run and is returned
/// verbatim; defaulted handlers succeed without doing anything.
pub fn generate<C>(codegen: &mut C, declarations: &[Declaration]) -> Result<()>
where
    C: LanguageCodegen + ?Sized,
{
    tracing::debug!(
        language = codegen.language(),
        declarations = declarations.len(),
        "driving code generation"
    );
    for decl in declarations {
        match decl {
            Declaration::SimpleType(d) => codegen.simple_type(d)?,
            Declaration::ComplexType(d) => codegen.complex_type(d)?,
            Declaration::Group(d) => codegen.group(d)?,
            Declaration::AttributeGroup(d) => codegen.attribute_group(d)?,
            Declaration::Element(d) => codegen.element(d)?,
            Declaration::Attribute(d) => codegen.attribute(d)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use eyre::eyre;
    use xsdgen_ir::DeclarationKind;

    use super::*;

    /// Records which handlers ran; overrides only two of the six kinds.
    #[derive(Default)]
    struct Recording {
        seen: Vec<(DeclarationKind, String)>,
    }

    impl LanguageCodegen for Recording {
        fn language(&self) -> &'static str {
            "rust"
        }

        fn file_extension(&self) -> &'static str {
            "rs"
        }

        fn simple_type(&mut self, decl: &SimpleType) -> Result<()> {
            self.seen
                .push((DeclarationKind::SimpleType, decl.name.clone()));
            Ok(())
        }

        fn element(&mut self, decl: &Element) -> Result<()> {
            self.seen.push((DeclarationKind::Element, decl.name.clone()));
            Ok(())
        }
    }

    struct FailsOnAttribute;

    impl LanguageCodegen for FailsOnAttribute {
        fn language(&self) -> &'static str {
            "c"
        }

        fn file_extension(&self) -> &'static str {
            "h"
        }

        fn attribute(&mut self, decl: &Attribute) -> Result<()> {
            Err(eyre!("cannot render attribute '{}'", decl.name))
        }
    }

    fn sample_declarations() -> Vec<Declaration> {
        vec![
            Declaration::SimpleType(SimpleType {
                name: "ISBN".into(),
                base: "token".into(),
                ..Default::default()
            }),
            Declaration::Attribute(Attribute {
                name: "lang".into(),
                type_name: "language".into(),
                ..Default::default()
            }),
            Declaration::Element(Element {
                name: "book".into(),
                type_name: "BookType".into(),
                ..Default::default()
            }),
            Declaration::ComplexType(ComplexType {
                name: "BookType".into(),
                ..Default::default()
            }),
        ]
    }

    #[test]
    fn test_unimplemented_handlers_are_skipped() {
        let mut codegen = Recording::default();
        generate(&mut codegen, &sample_declarations()).unwrap();

        assert_eq!(
            codegen.seen,
            vec![
                (DeclarationKind::SimpleType, "ISBN".to_string()),
                (DeclarationKind::Element, "book".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_schema_is_a_no_op() {
        let mut codegen = Recording::default();
        generate(&mut codegen, &[]).unwrap();
        assert!(codegen.seen.is_empty());
    }

    #[test]
    fn test_handler_error_propagates_verbatim() {
        let err = generate(&mut FailsOnAttribute, &sample_declarations()).unwrap_err();
        assert_eq!(err.to_string(), "cannot render attribute 'lang'");
    }
}
