//! Immutable run configuration, built once at the CLI boundary.
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::canonical::canonicalize;
use crate::error::{Error, Result};

static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type", "var",
];

/// Output naming for one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    package: String,
    type_name: String,
}

impl GenerateConfig {
    /// Validate the package name and canonicalize the root type name the same
    /// way JSON keys are canonicalized (`user_info` → `UserInfo`).
    pub fn new(package: &str, type_name: &str) -> Result<Self> {
        if !PACKAGE_NAME.is_match(package) {
            return Err(Error::invalid_argument(
                "package",
                format!("{package:?} is not a valid Go package name"),
            ));
        }
        if GO_KEYWORDS.contains(&package) {
            return Err(Error::invalid_argument(
                "package",
                format!("{package:?} is a Go keyword"),
            ));
        }
        let type_name = canonicalize(type_name)
            .map_err(|e| Error::invalid_argument("struct-name", e.to_string()))?;
        Ok(Self { package: package.to_string(), type_name })
    }

    pub fn package(&self) -> &str { &self.package }
    pub fn type_name(&self) -> &str { &self.type_name }
}

/// Where the document comes from and which part of it to infer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSettings {
    pub input: PathBuf,
    /// JSON Pointer selecting a sub-node, e.g. `/data/items/0`.
    pub json_pointer: Option<String>,
    /// jq filter applied after the pointer; must yield exactly one value.
    pub jq_expr: Option<String>,
}

impl LoadSettings {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), json_pointer: None, jq_expr: None }
    }
}
