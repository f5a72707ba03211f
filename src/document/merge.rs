//! Deep-merge primitive for configuration documents
//!
//! Merge semantics:
//! - Objects: deep-merge by key
//! - Arrays: REPLACE (second wins entirely)
//! - Scalars: override (second wins)

use serde_json::Value;

/// Deep merge two document values.
///
/// Objects merge recursively by key; arrays and scalars are taken wholesale
/// from the overlay. An explicit `null` in the overlay overrides the base
/// value, so callers that want "absent" semantics must omit the key rather
/// than set it to `null`.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        // Both objects: deep merge
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = if let Some(base_value) = base_map.remove(&key) {
                    deep_merge(base_value, overlay_value)
                } else {
                    overlay_value
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }

        // Arrays: REPLACE (no concatenation)
        (Value::Array(_), overlay @ Value::Array(_)) => overlay,

        // Scalars and any other case: overlay wins
        (_, overlay) => overlay,
    }
}
