//! Settings flatten/sync bridge
//!
//! Storefront settings (landing page copy, payment options, SMTP templates)
//! are nested objects in memory and `Key`/`Value` rows in the `Settings`
//! sheet. Payment and SMTP settings live under the `payment.` and `smtp.`
//! key prefixes of the same sheet.

mod diff;
mod flatten;
mod unflatten;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::cell::CellValue;
use crate::error::StructuralError;

pub use diff::{CellUpdate, SettingsRow, SettingsWritePlan, plan_settings_write};
pub use flatten::{MAX_FLATTEN_DEPTH, flatten};
pub use unflatten::unflatten;

/// Flat `dot.path -> cell` mapping, ordered by key
pub type FlatSettings = BTreeMap<String, CellValue>;

/// Key prefix of the payment partition
pub const PAYMENT_PREFIX: &str = "payment";
/// Key prefix of the SMTP partition
pub const SMTP_PREFIX: &str = "smtp";

/// The three settings partitions of the storefront
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsBundle {
    /// Landing page copy and other general settings
    #[serde(default)]
    pub general: Map<String, Value>,
    /// `section -> field -> value`, e.g. `gcash.enabled`
    #[serde(default)]
    pub payment: Map<String, Value>,
    /// SMTP connection and mail templates
    #[serde(default)]
    pub smtp: Map<String, Value>,
}

impl SettingsBundle {
    /// Flatten all partitions into one mapping, as stored in the sheet
    pub fn flatten(&self) -> Result<FlatSettings, StructuralError> {
        let mut flat = flatten_partition(&Value::Object(self.general.clone()), None)?;
        flat.extend(flatten_partition(
            &Value::Object(self.payment.clone()),
            Some(PAYMENT_PREFIX),
        )?);
        flat.extend(flatten_partition(
            &Value::Object(self.smtp.clone()),
            Some(SMTP_PREFIX),
        )?);
        Ok(flat)
    }
}

/// Flatten one partition, refusing keys that [`unflatten`] would not put
/// back in the same place.
///
/// - no key may contain an empty segment
/// - general keys may not start with `payment.` or `smtp.`
/// - payment keys must be exactly `payment.section.field`
pub fn flatten_partition(
    value: &Value,
    prefix: Option<&str>,
) -> Result<FlatSettings, StructuralError> {
    let flat = flatten(value, prefix)?;
    for key in flat.keys() {
        check_key(key, prefix)?;
    }
    Ok(flat)
}

fn check_key(key: &str, prefix: Option<&str>) -> Result<(), StructuralError> {
    let segments: Vec<&str> = key.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(StructuralError::MalformedKey {
            key: key.to_string(),
            reason: "empty path segment",
        });
    }
    match prefix {
        None if segments.len() > 1 => {
            for partition in [PAYMENT_PREFIX, SMTP_PREFIX] {
                if segments[0] == partition {
                    return Err(StructuralError::ReservedKey {
                        key: key.to_string(),
                        partition,
                    });
                }
            }
            Ok(())
        }
        Some(PAYMENT_PREFIX) if segments.len() != 3 => Err(StructuralError::MalformedKey {
            key: key.to_string(),
            reason: "payment settings must be section.field",
        }),
        _ => Ok(()),
    }
}
