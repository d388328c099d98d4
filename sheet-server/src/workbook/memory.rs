use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{Row, Workbook, WorkbookError, WorkbookResult};

/// Sheets keyed by name
pub(crate) type Sheets = BTreeMap<String, Vec<Row>>;

/// 内存工作簿 (开发和测试用)
#[derive(Debug, Default)]
pub struct MemoryWorkbook {
    sheets: RwLock<Sheets>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shared cell-update logic for the in-memory representation
pub(crate) fn set_cell(
    sheets: &mut Sheets,
    sheet: &str,
    row: usize,
    column: usize,
    value: Value,
) -> WorkbookResult<()> {
    let out_of_range = || WorkbookError::OutOfRange {
        sheet: sheet.to_string(),
        row,
        column,
    };
    if row == 0 || column == 0 {
        return Err(out_of_range());
    }
    let cells = sheets
        .get_mut(sheet)
        .and_then(|rows| rows.get_mut(row - 1))
        .ok_or_else(out_of_range)?;
    if cells.len() < column {
        cells.resize(column, Value::String(String::new()));
    }
    cells[column - 1] = value;
    Ok(())
}

#[async_trait]
impl Workbook for MemoryWorkbook {
    async fn read_rows(&self, sheet: &str) -> WorkbookResult<Vec<Row>> {
        Ok(self.sheets.read().await.get(sheet).cloned().unwrap_or_default())
    }

    async fn clear(&self, sheet: &str) -> WorkbookResult<()> {
        self.sheets
            .write()
            .await
            .insert(sheet.to_string(), Vec::new());
        Ok(())
    }

    async fn append_rows(&self, sheet: &str, rows: Vec<Row>) -> WorkbookResult<()> {
        self.sheets
            .write()
            .await
            .entry(sheet.to_string())
            .or_default()
            .extend(rows);
        Ok(())
    }

    async fn update_cell(
        &self,
        sheet: &str,
        row: usize,
        column: usize,
        value: Value,
    ) -> WorkbookResult<()> {
        let mut sheets = self.sheets.write().await;
        set_cell(&mut sheets, sheet, row, column, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_append_and_read() {
        let wb = MemoryWorkbook::new();
        assert!(wb.read_rows("Products").await.unwrap().is_empty());

        wb.append_rows("Products", vec![vec![json!("id")], vec![json!("P-1")]])
            .await
            .unwrap();
        let rows = wb.read_rows("Products").await.unwrap();
        assert_eq!(rows, vec![vec![json!("id")], vec![json!("P-1")]]);

        wb.clear("Products").await.unwrap();
        assert!(wb.read_rows("Products").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_cell_pads_short_rows() {
        let wb = MemoryWorkbook::new();
        wb.append_rows("Settings", vec![vec![json!("Key")]])
            .await
            .unwrap();
        wb.update_cell("Settings", 1, 2, json!("Value")).await.unwrap();
        assert_eq!(
            wb.read_rows("Settings").await.unwrap(),
            vec![vec![json!("Key"), json!("Value")]]
        );
    }

    #[tokio::test]
    async fn test_update_cell_out_of_range() {
        let wb = MemoryWorkbook::new();
        let err = wb.update_cell("Settings", 3, 1, json!("x")).await.unwrap_err();
        assert!(matches!(err, WorkbookError::OutOfRange { row: 3, .. }));
        assert!(wb.update_cell("Settings", 0, 1, json!("x")).await.is_err());
    }
}
