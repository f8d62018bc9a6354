use serde_json::Number;

use super::{InferenceError, JsonKind};
use crate::ir::InferredType;

/// Integer when the literal has no fractional part and fits in an i64.
pub(super) fn classify(n: &Number, path: &str) -> Result<InferredType, InferenceError> {
    if n.is_i64() {
        return Ok(InferredType::Integer);
    }
    match n.as_f64() {
        Some(f) if is_integral(f) => Ok(InferredType::Integer),
        Some(_) => Ok(InferredType::Float),
        None => Err(InferenceError::UnsupportedValue {
            path: path.to_string(),
            kind: JsonKind::Number,
        }),
    }
}

fn is_integral(f: f64) -> bool {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify_json(v: serde_json::Value) -> InferredType {
        match v {
            serde_json::Value::Number(n) => classify(&n, "$").unwrap(),
            other => panic!("not a number: {other}"),
        }
    }

    #[test]
    fn whole_numbers_are_integers() {
        assert_eq!(classify_json(json!(0)), InferredType::Integer);
        assert_eq!(classify_json(json!(-42)), InferredType::Integer);
        assert_eq!(classify_json(json!(i64::MAX)), InferredType::Integer);
        // no fractional part, even when written with a decimal point
        assert_eq!(classify_json(json!(2.0)), InferredType::Integer);
    }

    #[test]
    fn fractions_are_floats() {
        assert_eq!(classify_json(json!(0.5)), InferredType::Float);
        assert_eq!(classify_json(json!(-1.25)), InferredType::Float);
    }

    #[test]
    fn out_of_range_whole_numbers_are_floats() {
        assert_eq!(classify_json(json!(u64::MAX)), InferredType::Float);
        assert_eq!(classify_json(json!(1e300)), InferredType::Float);
    }
}
