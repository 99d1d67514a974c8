//! Target output languages.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A target language the generator can emit code for.
///
/// The discriminants index the per-language columns of the built-in type
/// table, so the variant order here must match the column order there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Go = 0,
    TypeScript = 1,
    C = 2,
    Java = 3,
    Rust = 4,
}

impl Lang {
    /// All supported target languages, in table column order.
    pub const ALL: [Lang; 5] = [Lang::Go, Lang::TypeScript, Lang::C, Lang::Java, Lang::Rust];

    /// Get the lowercase string representation (used in xsdgen.toml).
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Go => "go",
            Lang::TypeScript => "typescript",
            Lang::C => "c",
            Lang::Java => "java",
            Lang::Rust => "rust",
        }
    }

    /// File extension for generated source files, without the dot.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Lang::Go => "go",
            Lang::TypeScript => "ts",
            Lang::C => "h",
            Lang::Java => "java",
            Lang::Rust => "rs",
        }
    }

    /// Column index into the built-in type table.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "go" => Ok(Lang::Go),
            "typescript" | "ts" => Ok(Lang::TypeScript),
            "c" => Ok(Lang::C),
            "java" => Ok(Lang::Java),
            "rust" | "rs" => Ok(Lang::Rust),
            _ => Err(format!(
                "unknown target language '{s}', expected one of 'go', 'typescript', 'c', 'java', 'rust'"
            )),
        }
    }
}
