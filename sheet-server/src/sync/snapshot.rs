use serde_json::Value;
use shared::models::ENTITY_SCHEMAS;
use shared::protocol::{SettingsEntry, WorkbookSnapshot};
use shared::sheet::{SETTINGS_SCHEMA, row_object};

use super::settings::settings_rows;
use crate::workbook::{Workbook, WorkbookResult};

fn is_blank(cells: &[Value]) -> bool {
    cells.iter().all(|c| match c {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    })
}

/// Read every known sheet into a snapshot of flat row objects.
///
/// Cells are passed through raw; type resolution is left to the reader.
pub async fn read_snapshot(workbook: &dyn Workbook) -> WorkbookResult<WorkbookSnapshot> {
    let mut snapshot = WorkbookSnapshot::default();

    for schema in ENTITY_SCHEMAS.iter() {
        let rows = workbook.read_rows(schema.sheet).await?;
        let Some((header, body)) = rows.split_first() else {
            continue;
        };
        if let Some(target) = snapshot.rows_mut(schema.sheet) {
            target.extend(
                body.iter()
                    .filter(|cells| !is_blank(cells))
                    .map(|cells| row_object(header, cells)),
            );
        }
    }

    let settings = workbook.read_rows(SETTINGS_SCHEMA.sheet).await?;
    snapshot.settings = settings_rows(&settings)
        .into_iter()
        .map(|row| SettingsEntry {
            key: row.key,
            value: row.value,
        })
        .collect();

    Ok(snapshot)
}
