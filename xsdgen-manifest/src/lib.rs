// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! TOML manifest parsing and validation for the xsdgen code generator.
//!
//! An `xsdgen.toml` names the schemas to generate from and configures the
//! generator run:
//!
//! ```toml
//! [generator]
//! language = "rust"
//! package = "models"
//! output = "gen"
//!
//! schemas = ["schemas/library.xsd", "https://example.com/catalog.xsd"]
//! ```

mod error;

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

pub use error::{Error, Result};
use serde::Deserialize;
use xsdgen_core::Lang;

/// Conventional manifest file name.
pub const MANIFEST_FILE: &str = "xsdgen.toml";

/// Root schema for xsdgen.toml
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Generator configuration
    pub generator: GeneratorConfig,

    /// Schema files or URLs to generate from
    #[serde(default)]
    pub schemas: Vec<String>,
}

/// The `[generator]` table of xsdgen.toml
#[derive(Debug, Deserialize)]
pub struct GeneratorConfig {
    /// Target language for generated code
    pub language: Lang,

    /// Package/module name for generated code, defaulting to `schema`
    #[serde(default = "default_package")]
    pub package: String,

    /// Output directory for generated files
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_package() -> String {
    "schema".to_string()
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse an xsdgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse an xsdgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    if manifest.schemas.is_empty() {
        return Err(Error::validation(
            "no schemas listed, add at least one path or URL to 'schemas'",
            src,
            filename,
        ));
    }
    for schema in &manifest.schemas {
        if schema.trim().is_empty() {
            return Err(Error::validation("empty schema entry", src, filename));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest: Manifest = r#"
            [generator]
            language = "rust"

            schemas = ["schemas/library.xsd"]
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.generator.language, Lang::Rust);
        assert_eq!(manifest.generator.package, "schema");
        assert_eq!(manifest.generator.output, None);
        assert_eq!(manifest.schemas, vec!["schemas/library.xsd"]);
    }

    #[test]
    fn test_parse_full_manifest() {
        let manifest: Manifest = r#"
            [generator]
            language = "typescript"
            package = "models"
            output = "gen"

            schemas = ["a.xsd", "https://example.com/b.xsd"]
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.generator.language, Lang::TypeScript);
        assert_eq!(manifest.generator.package, "models");
        assert_eq!(manifest.generator.output, Some(PathBuf::from("gen")));
        assert_eq!(manifest.schemas.len(), 2);
    }

    #[test]
    fn test_unknown_language_is_parse_error() {
        let err = Manifest::from_str(
            r#"
            [generator]
            language = "cobol"

            schemas = ["a.xsd"]
        "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_schemas_is_validation_error() {
        let err = Manifest::from_str(
            r#"
            [generator]
            language = "go"
        "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Manifest::from_file("does/not/exist/xsdgen.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
