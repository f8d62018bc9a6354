//! Application-level errors: everything around the inference core.
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::inference::InferenceError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("failed to parse JSON source file ({}): {source}", path.display())]
    JsonParse { path: PathBuf, #[source] source: serde_json::Error },

    #[error("JSON pointer '{pointer}' matched nothing in {}", path.display())]
    PointerNotFound { pointer: String, path: PathBuf },

    #[error("failed to apply jq expression to source file ({}): {message}", path.display())]
    Jq { path: PathBuf, message: String },

    #[error("invalid parameter '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    #[error("error occurred when formatting go file '{}', details:\n{output}", path.display())]
    Format { path: PathBuf, output: String },

    #[error("failed to serialize inferred type: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl Error {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
