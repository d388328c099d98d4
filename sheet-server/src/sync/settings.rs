use serde_json::Value;
use shared::cell::CellValue;
use shared::settings::{FlatSettings, SettingsRow, SettingsWritePlan, plan_settings_write};
use shared::sheet::SETTINGS_SCHEMA;

use crate::workbook::{Row, Workbook, WorkbookResult};

const VALUE_COLUMN: usize = 2;

/// Parse stored settings rows, skipping the header and rows without a key
pub fn settings_rows(rows: &[Row]) -> Vec<SettingsRow> {
    rows.iter()
        .enumerate()
        .skip(1)
        .filter_map(|(idx, cells)| {
            let key = match cells.first()? {
                Value::String(s) => s.trim().to_string(),
                Value::Null => return None,
                other => other.to_string(),
            };
            if key.is_empty() {
                return None;
            }
            let value = cells
                .get(VALUE_COLUMN - 1)
                .map(CellValue::from_cell)
                .unwrap_or_else(CellValue::empty);
            Some(SettingsRow {
                key,
                value,
                row: idx + 1,
            })
        })
        .collect()
}

/// Patch the settings sheet with `incoming`.
///
/// Changed keys are rewritten cell by cell, new keys appended in one batch,
/// keys missing from `incoming` are left as they are.
pub async fn upsert_settings(
    workbook: &dyn Workbook,
    incoming: &FlatSettings,
) -> WorkbookResult<SettingsWritePlan> {
    let sheet = SETTINGS_SCHEMA.sheet;
    let rows = workbook.read_rows(sheet).await?;
    if rows.is_empty() {
        workbook
            .append_rows(sheet, vec![SETTINGS_SCHEMA.header_row()])
            .await?;
    }

    let plan = plan_settings_write(&settings_rows(&rows), incoming);

    for update in &plan.updates {
        tracing::debug!(key = %update.key, row = update.row, "Updating setting");
        workbook
            .update_cell(sheet, update.row, VALUE_COLUMN, update.value.to_cell())
            .await?;
    }
    if !plan.appends.is_empty() {
        let new_rows = plan
            .appends
            .iter()
            .map(|(key, value)| vec![Value::String(key.clone()), value.to_cell()])
            .collect();
        workbook.append_rows(sheet, new_rows).await?;
    }

    tracing::info!(
        updated = plan.updates.len(),
        appended = plan.appends.len(),
        "Settings saved"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::MemoryWorkbook;
    use serde_json::json;
    use shared::settings::flatten;

    async fn seeded() -> MemoryWorkbook {
        let wb = MemoryWorkbook::new();
        wb.append_rows(
            "Settings",
            vec![
                vec![json!("Key"), json!("Value")],
                vec![json!("x"), json!("1")],
            ],
        )
        .await
        .unwrap();
        wb
    }

    #[tokio::test]
    async fn test_update_in_place_and_append() {
        let wb = seeded().await;
        let incoming = flatten(&json!({"x": "2", "y": "3"}), None).unwrap();

        let plan = upsert_settings(&wb, &incoming).await.unwrap();
        assert_eq!(plan.updates.len(), 1);
        assert_eq!(plan.updates[0].row, 2);
        assert_eq!(plan.appends.len(), 1);

        assert_eq!(
            wb.read_rows("Settings").await.unwrap(),
            vec![
                vec![json!("Key"), json!("Value")],
                vec![json!("x"), json!("2")],
                vec![json!("y"), json!("3")],
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_incoming_leaves_stale_keys() {
        let wb = seeded().await;
        let plan = upsert_settings(&wb, &FlatSettings::new()).await.unwrap();
        assert!(plan.is_empty());
        assert_eq!(wb.read_rows("Settings").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_first_save_creates_header() {
        let wb = MemoryWorkbook::new();
        let incoming = flatten(&json!({"gcash": {"enabled": true}}), Some("payment")).unwrap();
        upsert_settings(&wb, &incoming).await.unwrap();
        assert_eq!(
            wb.read_rows("Settings").await.unwrap(),
            vec![
                vec![json!("Key"), json!("Value")],
                vec![json!("payment.gcash.enabled"), json!("true")],
            ]
        );
    }

    #[test]
    fn test_settings_rows_skip_blank_keys() {
        let rows = vec![
            vec![json!("Key"), json!("Value")],
            vec![json!(""), json!("orphan")],
            vec![json!("a.b"), json!("false")],
            vec![json!("short")],
        ];
        let parsed = settings_rows(&rows);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].key, "a.b");
        assert_eq!(parsed[0].row, 3);
        assert_eq!(parsed[0].value, CellValue::Bool(false));
        assert!(parsed[1].value.is_empty());
    }
}
