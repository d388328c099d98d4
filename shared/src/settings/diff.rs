//! Settings sheet write planning
//!
//! The settings sheet is patched in place: changed keys get a single-cell
//! update at their existing row, new keys are appended in one batch. Keys that
//! disappear from the incoming mapping are never deleted, so stale keys
//! accumulate in the sheet.

use std::collections::HashMap;

use super::FlatSettings;
use crate::cell::CellValue;

/// A settings row as currently stored
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsRow {
    pub key: String,
    pub value: CellValue,
    /// 1-based sheet row (row 1 is the header)
    pub row: usize,
}

/// Overwrite the value cell of an existing key
#[derive(Debug, Clone, PartialEq)]
pub struct CellUpdate {
    pub row: usize,
    pub key: String,
    pub value: CellValue,
}

/// Minimal write plan for the settings sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsWritePlan {
    pub updates: Vec<CellUpdate>,
    /// New `(key, value)` rows, appended together at the end of the sheet
    pub appends: Vec<(String, CellValue)>,
}

impl SettingsWritePlan {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.appends.is_empty()
    }
}

/// Diff the stored rows against the incoming flat settings.
///
/// Values are compared by their stored text, so `Bool(true)` and the text
/// `"true"` count as unchanged. When the sheet already holds a key twice the
/// first row is the one addressed.
pub fn plan_settings_write(existing: &[SettingsRow], incoming: &FlatSettings) -> SettingsWritePlan {
    let mut by_key: HashMap<&str, &SettingsRow> = HashMap::with_capacity(existing.len());
    for row in existing {
        by_key.entry(row.key.as_str()).or_insert(row);
    }

    let mut plan = SettingsWritePlan::default();
    for (key, value) in incoming {
        match by_key.get(key.as_str()) {
            Some(current) if current.value.to_string() == value.to_string() => {}
            Some(current) => plan.updates.push(CellUpdate {
                row: current.row,
                key: key.clone(),
                value: value.clone(),
            }),
            None => plan.appends.push((key.clone(), value.clone())),
        }
    }
    plan
}
