//! Recursive merge of JSON config trees.

use serde_json::Value;

/// Merge `update` into `base` in place.
///
/// When both sides hold an object under the same key the merge recurses;
/// otherwise the update value replaces the base value outright. Arrays and
/// scalars are never merged element-wise. Keys only present in `update` are
/// added.
pub fn deep_merge(base: &mut Value, update: &Value) {
    match (base, update) {
        (Value::Object(base_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                match base_map.get_mut(key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        deep_merge(existing, value);
                    }
                    Some(existing) => *existing = value.clone(),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, update) => *base = update.clone(),
    }
}
