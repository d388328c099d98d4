//! Nested settings -> dot-keyed flat rows

use serde_json::{Map, Value};

use super::FlatSettings;
use crate::cell::CellValue;
use crate::error::StructuralError;

/// Maximum object nesting accepted by [`flatten`]
pub const MAX_FLATTEN_DEPTH: usize = 32;

/// Flatten a nested settings object into `dot.path -> cell` pairs.
///
/// Objects are recursed into. Everything else, arrays included, is a leaf;
/// arrays are never split into indexed keys. With `prefix` the whole object
/// is namespaced (`payment.gcash.enabled`).
///
/// ```
/// use serde_json::json;
/// use shared::settings::flatten;
///
/// let flat = flatten(&json!({"a": {"b": 1, "c": [1, 2]}}), None).unwrap();
/// assert_eq!(flat["a.b"].to_string(), "1");
/// assert_eq!(flat["a.c"].to_string(), "[1,2]");
/// ```
pub fn flatten(value: &Value, prefix: Option<&str>) -> Result<FlatSettings, StructuralError> {
    let mut out = FlatSettings::new();
    let prefix = prefix.unwrap_or("");
    match value {
        Value::Object(map) => flatten_into(map, prefix, 0, &mut out)?,
        leaf if !prefix.is_empty() => {
            out.insert(prefix.to_string(), CellValue::from_leaf(leaf));
        }
        _ => return Err(StructuralError::NotAnObject),
    }
    Ok(out)
}

fn flatten_into(
    map: &Map<String, Value>,
    prefix: &str,
    depth: usize,
    out: &mut FlatSettings,
) -> Result<(), StructuralError> {
    if depth >= MAX_FLATTEN_DEPTH {
        return Err(StructuralError::TooDeep {
            path: prefix.to_string(),
            limit: MAX_FLATTEN_DEPTH,
        });
    }

    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(child) => flatten_into(child, &path, depth + 1, out)?,
            leaf => {
                out.insert(path, CellValue::from_leaf(leaf));
            }
        }
    }
    Ok(())
}
