//! Single-document type inference.
//!
//! Walk one parsed JSON object depth-first and build an `InferredType` tree:
//! - every key goes through `canonical::canonicalize`; collisions are rejected
//!   before descending into the record's values;
//! - arrays must be homogeneous (Integer and Float widen to Float);
//! - the first error anywhere aborts the whole walk.
pub mod num;
pub mod arr;
pub mod obj;

use serde_json::{Map, Value};

use crate::ir::InferredType;

pub const ROOT_PATH: &str = "$";

// ------------------------------- Kinds ------------------------------------ //

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JsonKind { Null, Bool, Number, String, Array, Object }

impl JsonKind {
    pub fn of(v: &Value) -> Self {
        match v {
            Value::Null      => JsonKind::Null,
            Value::Bool(_)   => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_)  => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl std::fmt::Display for JsonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

// ------------------------------- Errors ----------------------------------- //

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalizationReason {
    Empty,
    InvalidFirstChar(char),
    InvalidTagChar(char),
}

impl std::fmt::Display for CanonicalizationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanonicalizationReason::Empty => write!(f, "field name is empty"),
            CanonicalizationReason::InvalidFirstChar(c) => {
                write!(f, "first character {c:?} is not an ASCII letter")
            }
            CanonicalizationReason::InvalidTagChar(c) => {
                write!(f, "character {c:?} cannot appear in a Go json tag")
            }
        }
    }
}

/// Terminal failures of an inference run. Paths use `$.a.b[0]` notation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    #[error("top-level JSON value must be an object, found {found}")]
    MalformedInput { found: JsonKind },

    #[error("invalid json key {key:?}: {reason}")]
    Canonicalization { key: String, reason: CanonicalizationReason },

    #[error("duplicate field name '{identifier}' at {path} for json keys '{key_a}' and '{key_b}'")]
    Collision { path: String, identifier: String, key_a: String, key_b: String },

    #[error("array at {path} is not homogeneous: element 0 is {first_type}, element {mismatched_index} is {mismatched_type}")]
    Homogeneity {
        path: String,
        first_type: InferredType,
        mismatched_index: usize,
        mismatched_type: InferredType,
    },

    #[error("unsupported {kind} value at {path}")]
    UnsupportedValue { path: String, kind: JsonKind },
}

// ------------------------------- Front API -------------------------------- //

/// Infer the root record of a document. The root is an object by construction.
pub fn infer_document(map: &Map<String, Value>) -> Result<InferredType, InferenceError> {
    obj::infer_record(map, ROOT_PATH)
}

/// Like `infer_document`, for callers still holding an untyped root.
pub fn infer_root(value: &Value) -> Result<InferredType, InferenceError> {
    match value {
        Value::Object(map) => infer_document(map),
        other => Err(InferenceError::MalformedInput { found: JsonKind::of(other) }),
    }
}

/// Infer the type of any JSON value.
pub fn infer(value: &Value) -> Result<InferredType, InferenceError> {
    infer_at(value, ROOT_PATH)
}

// ------------------------------- Dispatch --------------------------------- //

pub(crate) fn infer_at(value: &Value, path: &str) -> Result<InferredType, InferenceError> {
    match value {
        Value::Null => Ok(InferredType::Dynamic),
        Value::Bool(_) => Ok(InferredType::Bool),
        Value::Number(n) => num::classify(n, path),
        Value::String(_) => Ok(InferredType::String),
        Value::Array(xs) => arr::infer_array(xs, path),
        Value::Object(map) => obj::infer_record(map, path),
    }
}

// ------------------------------- Paths ------------------------------------ //

pub(crate) fn child_path(path: &str, key: &str) -> String {
    let plain = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        format!("{path}.{key}")
    } else {
        format!("{path}[{key:?}]")
    }
}

pub(crate) fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn infer_json(v: Value) -> Result<InferredType, InferenceError> {
        infer_root(&v)
    }

    #[test]
    fn scalars_dispatch_by_kind() {
        assert_eq!(infer(&json!(null)).unwrap(), InferredType::Dynamic);
        assert_eq!(infer(&json!(true)).unwrap(), InferredType::Bool);
        assert_eq!(infer(&json!("x")).unwrap(), InferredType::String);
        assert_eq!(infer(&json!(3)).unwrap(), InferredType::Integer);
        assert_eq!(infer(&json!(3.25)).unwrap(), InferredType::Float);
    }

    #[test]
    fn non_object_root_is_malformed() {
        let err = infer_json(json!([1, 2])).unwrap_err();
        assert_eq!(err, InferenceError::MalformedInput { found: JsonKind::Array });
        let err = infer_json(json!("text")).unwrap_err();
        assert_eq!(err, InferenceError::MalformedInput { found: JsonKind::String });
    }

    #[test]
    fn empty_object_is_an_empty_record() {
        let ty = infer_json(json!({})).unwrap();
        assert_eq!(ty, InferredType::Record { fields: vec![] });
    }

    #[test]
    fn null_field_is_dynamic() {
        let ty = infer_json(json!({"x": null})).unwrap();
        let x = ty.field("X").unwrap();
        assert_eq!(x.key, "x");
        assert_eq!(x.ty, InferredType::Dynamic);
    }

    #[test]
    fn nested_records_keep_original_keys() {
        let ty = infer_json(json!({"addr": {"city": "x", "zip": 1}})).unwrap();
        let addr = ty.field("Addr").unwrap();
        assert_eq!(addr.key, "addr");
        assert!(addr.ty.is_record());
        let city = addr.ty.field("City").unwrap();
        let zip = addr.ty.field("Zip").unwrap();
        assert_eq!((city.key.as_str(), &city.ty), ("city", &InferredType::String));
        assert_eq!((zip.key.as_str(), &zip.ty), ("zip", &InferredType::Integer));
    }

    #[test]
    fn fields_are_sorted_by_identifier_not_input_order() {
        let ty = infer_json(json!({"zeta": 1, "alpha": 2, "Mid": 3, "beta_x": 4})).unwrap();
        let InferredType::Record { fields } = ty else { panic!("expected record") };
        let ids: Vec<_> = fields.iter().map(|f| f.identifier.as_str()).collect();
        assert_eq!(ids, ["Alpha", "BetaX", "Mid", "Zeta"]);
    }

    #[test]
    fn inference_is_deterministic() {
        let doc = json!({"b": [1, 2], "a": {"y": null, "x": [{"k": "v"}]}});
        assert_eq!(infer_json(doc.clone()).unwrap(), infer_json(doc).unwrap());
    }

    #[test]
    fn repeated_sub_values_are_inferred_independently() {
        let ty = infer_json(json!({"a": {"n": 1}, "b": {"n": 1}})).unwrap();
        let a = &ty.field("A").unwrap().ty;
        let b = &ty.field("B").unwrap().ty;
        assert_eq!(a, b);
        assert!(!std::ptr::eq(a, b));
    }

    #[test]
    fn first_error_aborts_the_walk() {
        // the collision inside "a" wins; "b" is never reached
        let err = infer_json(json!({
            "a": {"user_name": 1, "userName": 2},
            "b": [1, "x"]
        }))
        .unwrap_err();
        assert!(matches!(err, InferenceError::Collision { .. }));
    }

    #[test]
    fn errors_carry_the_key_path() {
        let err = infer_json(json!({"outer": {"list": [{"v": 1}, {"v": "s"}]}})).unwrap_err();
        match err {
            InferenceError::Homogeneity { path, mismatched_index, .. } => {
                assert_eq!(path, "$.outer.list");
                assert_eq!(mismatched_index, 1);
            }
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn odd_keys_are_quoted_in_paths() {
        assert_eq!(child_path("$", "plain_key"), "$.plain_key");
        assert_eq!(child_path("$", "a.b"), "$[\"a.b\"]");
        assert_eq!(index_path("$.xs", 3), "$.xs[3]");
    }
}
