use std::collections::btree_map::{BTreeMap, Entry};

use serde_json::{Map, Value};

use super::{child_path, infer_at, InferenceError};
use crate::canonical::{canonicalize, check_tag_key};
use crate::ir::{Field, InferredType};

/// Infer a record: canonicalize all keys and reject collisions first, then
/// recurse into the values in identifier order.
pub(super) fn infer_record(map: &Map<String, Value>, path: &str) -> Result<InferredType, InferenceError> {
    // identifier -> (original key, value); BTreeMap gives the sorted field order
    let mut by_identifier: BTreeMap<String, (&String, &Value)> = BTreeMap::new();
    for (key, value) in map {
        let identifier = canonicalize(key)?;
        check_tag_key(key)?;
        match by_identifier.entry(identifier) {
            Entry::Occupied(existing) => {
                return Err(InferenceError::Collision {
                    path: path.to_string(),
                    identifier: existing.key().clone(),
                    key_a: existing.get().0.clone(),
                    key_b: key.clone(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert((key, value));
            }
        }
    }

    let mut fields = Vec::with_capacity(by_identifier.len());
    for (identifier, (key, value)) in by_identifier {
        let ty = infer_at(value, &child_path(path, key))?;
        fields.push(Field { key: key.clone(), identifier, ty });
    }
    Ok(InferredType::Record { fields })
}
