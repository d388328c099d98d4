use serde_json::{Map, Value};
use shared::sheet::{SheetSchema, encode_row};

use crate::workbook::{Workbook, WorkbookResult};

/// Replace the whole contents of an entity sheet.
///
/// Clears the sheet, writes the header row, then appends every record mapped
/// through the header list in input order. An empty list still leaves the
/// header behind. There is no rollback: if a call fails midway the sheet may
/// hold only the header or a prefix of the rows. Returns the data row count.
pub async fn full_sync(
    workbook: &dyn Workbook,
    schema: &SheetSchema,
    records: &[Map<String, Value>],
) -> WorkbookResult<usize> {
    let rows: Vec<_> = records.iter().map(|r| encode_row(schema, r)).collect();
    let count = rows.len();

    workbook.clear(schema.sheet).await?;
    workbook
        .append_rows(schema.sheet, vec![schema.header_row()])
        .await?;
    if !rows.is_empty() {
        workbook.append_rows(schema.sheet, rows).await?;
    }

    tracing::info!(sheet = schema.sheet, rows = count, "Sheet overwritten");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::MemoryWorkbook;
    use serde_json::json;
    use shared::SheetEntity;
    use shared::models::Product;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_empty_list_still_writes_header() {
        let wb = MemoryWorkbook::new();
        wb.append_rows("Products", vec![vec![json!("old")], vec![json!("row")]])
            .await
            .unwrap();

        let count = full_sync(&wb, &Product::SCHEMA, &[]).await.unwrap();
        assert_eq!(count, 0);
        assert_eq!(
            wb.read_rows("Products").await.unwrap(),
            vec![Product::SCHEMA.header_row()]
        );
    }

    #[tokio::test]
    async fn test_rows_follow_input_order() {
        let wb = MemoryWorkbook::new();
        let records = vec![
            record(json!({"id": "B", "name": "Second", "price": 2})),
            record(json!({"id": "A", "name": "First", "price": 1})),
        ];
        full_sync(&wb, &Product::SCHEMA, &records).await.unwrap();

        let rows = wb.read_rows("Products").await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][0], json!("B"));
        assert_eq!(rows[2][0], json!("A"));
        // category/stock/image/is_active missing -> blank cells
        assert_eq!(rows[1][2], json!(""));
    }
}
