//! Document loader: file → JSON value → selected root object.
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::LoadSettings;
use crate::error::{Error, Result};
use crate::inference::{InferenceError, JsonKind};

/// Read, parse and narrow the input document down to the object to infer from.
pub fn load_document(settings: &LoadSettings) -> Result<Map<String, Value>> {
    let source = std::fs::read_to_string(&settings.input)
        .map_err(|e| Error::io(&settings.input, e))?;
    debug!(path = %settings.input.display(), bytes = source.len(), "read JSON source");
    prepare_document(&source, settings)
}

/// Same as `load_document` for a source already in memory.
pub fn prepare_document(source: &str, settings: &LoadSettings) -> Result<Map<String, Value>> {
    let mut value = serde_json::from_str::<Value>(source).map_err(|e| Error::JsonParse {
        path: settings.input.clone(),
        source: e,
    })?;

    if let Some(pointer) = settings.json_pointer.as_deref() {
        value = value
            .pointer_mut(pointer)
            .map(Value::take)
            .ok_or_else(|| Error::PointerNotFound {
                pointer: pointer.to_string(),
                path: settings.input.clone(),
            })?;
        debug!(pointer, "selected sub-document");
    }

    if let Some(jq_expr) = settings.jq_expr.as_deref() {
        value = crate::jq_exec::run_jaq_single(jq_expr, &value).map_err(|e| Error::Jq {
            path: settings.input.clone(),
            message: format!("{e:#}"),
        })?;
        debug!(jq_expr, "applied jq filter");
    }

    into_object(value)
}

fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(InferenceError::MalformedInput { found: JsonKind::of(&other) }.into()),
    }
}
