//! Dot-keyed flat rows -> nested settings partitions

use serde_json::{Map, Value};

use super::{PAYMENT_PREFIX, SMTP_PREFIX, SettingsBundle};
use crate::cell::CellValue;

/// Rebuild the three settings partitions from flat `(key, cell)` pairs.
///
/// - `payment.<section>.<field>`: exactly two segments after the prefix
/// - `smtp.<...>`: any depth
/// - everything else: general settings, any depth
///
/// Malformed keys are logged and skipped; parsing never fails as a whole.
pub fn unflatten<I, K>(entries: I) -> SettingsBundle
where
    I: IntoIterator<Item = (K, CellValue)>,
    K: AsRef<str>,
{
    let mut bundle = SettingsBundle::default();

    for (key, cell) in entries {
        let key = key.as_ref();
        let (target, path, partition) = if let Some(rest) = strip_partition(key, PAYMENT_PREFIX) {
            (&mut bundle.payment, rest, PAYMENT_PREFIX)
        } else if let Some(rest) = strip_partition(key, SMTP_PREFIX) {
            (&mut bundle.smtp, rest, SMTP_PREFIX)
        } else {
            (&mut bundle.general, key, "general")
        };

        let segments: Vec<&str> = path.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            tracing::warn!(key, partition, "Skipping settings key with empty segment");
            continue;
        }
        if partition == PAYMENT_PREFIX && segments.len() != 2 {
            tracing::warn!(
                key,
                segments = segments.len(),
                "Skipping payment key, expected payment.<section>.<field>"
            );
            continue;
        }

        if !insert_path(target, &segments, cell.into_value()) {
            tracing::warn!(key, partition, "Skipping settings key that descends through a scalar");
        }
    }

    bundle
}

/// `payment.gcash` -> `Some("gcash")`; `payment` alone is a general key
fn strip_partition<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    key.strip_prefix(prefix)?.strip_prefix('.')
}

/// Place `value` at `segments`, creating intermediate objects.
///
/// Returns false when an intermediate segment already holds a non-object.
/// A leaf overwrites whatever is at its own position.
fn insert_path(root: &mut Map<String, Value>, segments: &[&str], value: Value) -> bool {
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut current = root;
    for segment in parents {
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        current = match slot {
            Value::Object(child) => child,
            _ => return false,
        };
    }
    current.insert(last.to_string(), value);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(pairs: &[(&str, Value)]) -> Vec<(String, CellValue)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), CellValue::from_cell(v)))
            .collect()
    }

    #[test]
    fn test_payment_boolean_is_coerced() {
        let bundle = unflatten(rows(&[("payment.gcash.enabled", json!("true"))]));
        assert_eq!(bundle.payment["gcash"]["enabled"], json!(true));
        assert!(bundle.general.is_empty());
    }

    #[test]
    fn test_payment_deep_key_is_skipped() {
        let bundle = unflatten(rows(&[
            ("payment.gcash.extra.deep", json!("x")),
            ("payment.gcash", json!("shallow")),
            ("payment.maya.enabled", json!("false")),
        ]));
        assert_eq!(bundle.payment, json!({"maya": {"enabled": false}}).as_object().cloned().unwrap());
    }

    #[test]
    fn test_smtp_allows_any_depth() {
        let bundle = unflatten(rows(&[
            ("smtp.host", json!("smtp.example.ph")),
            ("smtp.templates.order.subject", json!("Order received")),
            ("smtp.port", json!(587)),
        ]));
        assert_eq!(
            Value::Object(bundle.smtp),
            json!({
                "host": "smtp.example.ph",
                "port": 587,
                "templates": {"order": {"subject": "Order received"}}
            })
        );
    }

    #[test]
    fn test_general_keys_nest_and_parse_json() {
        let bundle = unflatten(rows(&[
            ("hero.title", json!("Fast WiFi")),
            ("hero.badges", json!("[\"5G\",\"No contract\"]")),
            ("footer.show", json!("false")),
        ]));
        assert_eq!(
            Value::Object(bundle.general),
            json!({
                "hero": {"title": "Fast WiFi", "badges": ["5G", "No contract"]},
                "footer": {"show": false}
            })
        );
    }

    #[test]
    fn test_bare_partition_names_are_general_keys() {
        let bundle = unflatten(rows(&[("payment", json!("on")), ("smtpish.a", json!(1))]));
        assert_eq!(bundle.general["payment"], json!("on"));
        assert_eq!(bundle.general["smtpish"]["a"], json!(1));
        assert!(bundle.payment.is_empty());
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let bundle = unflatten(rows(&[
            ("a..b", json!(1)),
            ("trailing.", json!(1)),
            ("payment.", json!(1)),
            ("ok", json!(1)),
        ]));
        assert_eq!(Value::Object(bundle.general), json!({"ok": 1}));
        assert!(bundle.payment.is_empty());
    }

    #[test]
    fn test_key_through_scalar_is_skipped() {
        let bundle = unflatten(rows(&[("a", json!("x")), ("a.b", json!("y"))]));
        assert_eq!(bundle.general["a"], json!("x"));
    }

    #[test]
    fn test_later_scalar_replaces_object() {
        let bundle = unflatten(rows(&[("a.b", json!("y")), ("a", json!("x"))]));
        assert_eq!(bundle.general["a"], json!("x"));
    }
}
