//! Go source emission for an inferred type tree.
//!
//! Records are emitted inline at their point of use; only the root gets a
//! named `type` declaration. Indentation is one tab per nesting level, which
//! is what `gofmt` produces minus column alignment.
use serde_json::{Map, Value};

use crate::config::GenerateConfig;
use crate::inference::{infer_document, InferenceError};
use crate::ir::{Field, InferredType};

pub struct Codegen {
    out: String,
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

impl Codegen {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn emit_package(&mut self, package: &str) {
        self.out.push_str("package ");
        self.out.push_str(package);
        self.out.push_str("\n\n");
    }

    /// `type <name> <body>` for the root type.
    pub fn emit(&mut self, root: &InferredType, type_name: &str) {
        self.out.push_str("type ");
        self.out.push_str(type_name);
        self.out.push(' ');
        self.emit_type(root, 0);
        self.out.push('\n');
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn emit_type(&mut self, ty: &InferredType, depth: usize) {
        match ty {
            InferredType::Bool => self.out.push_str("bool"),
            InferredType::String => self.out.push_str("string"),
            InferredType::Integer => self.out.push_str("int64"),
            InferredType::Float => self.out.push_str("float64"),
            InferredType::Dynamic => self.out.push_str("interface{}"),
            InferredType::Array { element } => {
                self.out.push_str("[]");
                self.emit_type(element, depth);
            }
            InferredType::Record { fields } if fields.is_empty() => self.out.push_str("struct{}"),
            InferredType::Record { fields } => {
                self.out.push_str("struct {\n");
                for field in fields {
                    self.emit_field(field, depth + 1);
                }
                self.indent(depth);
                self.out.push('}');
            }
        }
    }

    fn emit_field(&mut self, field: &Field, depth: usize) {
        self.indent(depth);
        self.out.push_str(&field.identifier);
        self.out.push(' ');
        self.emit_type(&field.ty, depth);
        self.out.push(' ');
        self.out.push_str(&struct_tag(&field.key));
        self.out.push('\n');
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push('\t');
        }
    }
}

/// Full file: package header plus the named root type.
pub fn render(config: &GenerateConfig, root: &InferredType) -> String {
    let mut cg = Codegen::new();
    cg.emit_package(config.package());
    cg.emit(root, config.type_name());
    cg.into_string()
}

/// Infer and render in one go. Nothing is produced on error.
pub fn generate(config: &GenerateConfig, document: &Map<String, Value>) -> Result<String, InferenceError> {
    let root = infer_document(document)?;
    Ok(render(config, &root))
}

/// `json:"<key>"`. Keys reaching here passed `canonical::check_tag_key`, so
/// they need no escaping.
fn struct_tag(key: &str) -> String {
    format!("`json:\"{key}\"`")
}
