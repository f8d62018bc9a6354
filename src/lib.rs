//! Infer a Go `struct` declaration from a sample JSON document.
//!
//! Pipeline: load → infer (`inference`) → render (`codegen`) → write (`output`).
//! Only `canonical`, `inference`, `ir` and `codegen` make up the engine; the
//! rest is file and process plumbing around it.
pub mod canonical;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod inference;
pub mod ir;
pub mod jq_exec;
pub mod loader;
pub mod output;

pub use codegen::generate;
pub use config::GenerateConfig;
pub use error::{Error, Result};
pub use inference::{infer_document, InferenceError};
pub use ir::{Field, InferredType};
