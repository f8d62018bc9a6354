use serde_json::Value;

use super::{index_path, infer_at, InferenceError};
use crate::ir::{Field, InferredType};

/// Infer a homogeneous array. Elements recurse fully (arrays of arrays and
/// arrays of records included); `[]` is an array of Dynamic.
pub(super) fn infer_array(xs: &[Value], path: &str) -> Result<InferredType, InferenceError> {
    let mut items = xs.iter().enumerate();
    let Some((_, first)) = items.next() else {
        return Ok(InferredType::array(InferredType::Dynamic));
    };

    let first_type = infer_at(first, &index_path(path, 0))?;
    let mut element = first_type.clone();
    for (i, x) in items {
        let ty = infer_at(x, &index_path(path, i))?;
        element = match unify(&element, &ty) {
            Some(joined) => joined,
            None => {
                return Err(InferenceError::Homogeneity {
                    path: path.to_string(),
                    first_type,
                    mismatched_index: i,
                    mismatched_type: ty,
                });
            }
        };
    }
    Ok(InferredType::array(element))
}

/// Join two element types: Integer ⊔ Float = Float, applied through nested
/// arrays and through records with identical field sets. Anything else must
/// match exactly; Dynamic only unifies with Dynamic.
pub(crate) fn unify(a: &InferredType, b: &InferredType) -> Option<InferredType> {
    match (a, b) {
        (InferredType::Integer, InferredType::Float)
        | (InferredType::Float, InferredType::Integer) => Some(InferredType::Float),
        (InferredType::Array { element: x }, InferredType::Array { element: y }) => {
            unify(x, y).map(InferredType::array)
        }
        (InferredType::Record { fields: fa }, InferredType::Record { fields: fb }) => {
            if fa.len() != fb.len() {
                return None;
            }
            // both sides are sorted by identifier, so a zip lines them up
            let fields = fa
                .iter()
                .zip(fb)
                .map(|(x, y)| {
                    if x.identifier != y.identifier || x.key != y.key {
                        return None;
                    }
                    Some(Field {
                        key: x.key.clone(),
                        identifier: x.identifier.clone(),
                        ty: unify(&x.ty, &y.ty)?,
                    })
                })
                .collect::<Option<Vec<_>>>()?;
            Some(InferredType::Record { fields })
        }
        (x, y) if x == y => Some(x.clone()),
        _ => None,
    }
}
