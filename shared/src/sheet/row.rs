//! Entity <-> row codec
//!
//! Each entity sheet has a handful of promoted columns plus a `json_data`
//! column carrying everything else as a JSON object. On read the two are
//! merged by [`merge_promoted`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::schema::{JSON_DATA_COLUMN, SheetSchema};
use crate::cell::CellValue;
use crate::error::RowError;

/// One sheet row keyed by header, as returned by the read endpoint
pub type FlatRow = Map<String, Value>;

/// Map a record through the header list into raw cells.
///
/// Missing promoted fields become empty cells. Fields without a column go into
/// `json_data`; on a sheet without that column they are dropped.
pub fn encode_row(schema: &SheetSchema, record: &Map<String, Value>) -> Vec<Value> {
    schema
        .headers
        .iter()
        .map(|header| {
            if *header == JSON_DATA_COLUMN {
                let rest: Map<String, Value> = record
                    .iter()
                    .filter(|(field, _)| !schema.is_promoted(field))
                    .map(|(field, value)| (field.clone(), value.clone()))
                    .collect();
                if rest.is_empty() {
                    CellValue::empty().to_cell()
                } else {
                    CellValue::Json(Value::Object(rest)).to_cell()
                }
            } else {
                record
                    .get(*header)
                    .map(CellValue::from_leaf)
                    .unwrap_or_else(CellValue::empty)
                    .to_cell()
            }
        })
        .collect()
}

/// Zip a raw row with its headers into a [`FlatRow`]; short rows pad with blanks
pub fn row_object(headers: &[Value], cells: &[Value]) -> FlatRow {
    headers
        .iter()
        .enumerate()
        .filter_map(|(idx, header)| {
            let name = header.as_str().filter(|h| !h.is_empty())?;
            let cell = cells.get(idx).cloned().unwrap_or_else(|| CellValue::empty().to_cell());
            Some((name.to_string(), cell))
        })
        .collect()
}

/// Merge a row's promoted columns over its `json_data` blob.
///
/// Precedence, highest first:
/// 1. a non-empty promoted column
/// 2. the same-named field inside the blob
///
/// Blank columns (`""` or `null`) never override the blob.
pub fn merge_promoted(blob: Map<String, Value>, columns: Map<String, Value>) -> Map<String, Value> {
    let mut merged = blob;
    for (field, value) in columns {
        let blank = match &value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        if !blank {
            merged.insert(field, value);
        }
    }
    merged
}

/// Decode a flat row object into a typed entity.
///
/// Text columns keep the raw cell text; every other promoted column is
/// resolved through [`CellValue::from_cell`].
pub fn decode_row<T: DeserializeOwned>(schema: &SheetSchema, row: &FlatRow) -> Result<T, RowError> {
    let blob = match row.get(JSON_DATA_COLUMN) {
        None | Some(Value::Null) => Map::new(),
        Some(Value::String(text)) if text.trim().is_empty() => Map::new(),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text).map_err(RowError::Blob)? {
            Value::Object(map) => map,
            _ => return Err(RowError::BlobNotObject),
        },
        Some(Value::Object(map)) => map.clone(),
        Some(_) => return Err(RowError::BlobNotObject),
    };

    let columns = row
        .iter()
        .filter(|(field, _)| field.as_str() != JSON_DATA_COLUMN)
        .map(|(field, raw)| {
            let value = if schema.is_text(field) {
                text_cell(raw)
            } else {
                CellValue::from_cell(raw).into_value()
            };
            (field.clone(), value)
        })
        .collect();

    let merged = merge_promoted(blob, columns);
    Ok(serde_json::from_value(Value::Object(merged))?)
}

/// A text column as a string; storage may hand back numbers or booleans
fn text_cell(raw: &Value) -> Value {
    match raw {
        Value::Null | Value::String(_) => raw.clone(),
        Value::Bool(b) => Value::String(b.to_string()),
        Value::Number(n) => Value::String(n.to_string()),
        Value::Array(_) | Value::Object(_) => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    const GADGETS: SheetSchema = SheetSchema {
        sheet: "Gadgets",
        headers: &["id", "name", "active", "json_data"],
        text_columns: &["id", "name"],
    };

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Gadget {
        id: String,
        name: String,
        active: bool,
        #[serde(default)]
        tags: Vec<String>,
        #[serde(default)]
        note: Option<String>,
    }

    #[test]
    fn test_encode_follows_header_order() {
        let record = object(json!({
            "name": "Pocket WiFi",
            "id": "P-1",
            "active": true,
            "tags": ["4G"]
        }));
        let row = encode_row(&GADGETS, &record);
        assert_eq!(
            row,
            vec![
                json!("P-1"),
                json!("Pocket WiFi"),
                json!("true"),
                json!("{\"tags\":[\"4G\"]}")
            ]
        );
    }

    #[test]
    fn test_encode_missing_fields_are_blank() {
        let row = encode_row(&GADGETS, &object(json!({"id": "P-2"})));
        assert_eq!(row, vec![json!("P-2"), json!(""), json!(""), json!("")]);
    }

    #[test]
    fn test_encode_without_blob_column_drops_extras() {
        const PLAIN: SheetSchema = SheetSchema {
            sheet: "Plain",
            headers: &["id"],
            text_columns: &["id"],
        };
        let row = encode_row(&PLAIN, &object(json!({"id": "a", "extra": 1})));
        assert_eq!(row, vec![json!("a")]);
    }

    #[test]
    fn test_merge_promoted_column_wins() {
        let merged = merge_promoted(
            object(json!({"name": "old", "note": "kept"})),
            object(json!({"name": "new", "id": ""})),
        );
        assert_eq!(Value::Object(merged), json!({"name": "new", "note": "kept"}));
    }

    #[test]
    fn test_decode_round_trip_and_precedence() {
        let headers = GADGETS.header_row();
        let cells = vec![
            json!("P-3"),
            json!("Router"),
            json!("false"),
            json!("{\"name\":\"stale\",\"tags\":[\"5G\"],\"note\":\"hi\"}"),
        ];
        let gadget: Gadget = decode_row(&GADGETS, &row_object(&headers, &cells)).unwrap();
        assert_eq!(
            gadget,
            Gadget {
                id: "P-3".into(),
                name: "Router".into(),
                active: false,
                tags: vec!["5G".into()],
                note: Some("hi".into()),
            }
        );
    }

    #[test]
    fn test_text_columns_are_not_sniffed() {
        let record = object(json!({"id": "P-4", "name": "true", "active": true, "note": "{}"}));
        let row = row_object(&GADGETS.header_row(), &encode_row(&GADGETS, &record));
        let gadget: Gadget = decode_row(&GADGETS, &row).unwrap();
        assert_eq!(gadget.name, "true");
        assert!(gadget.active);
        assert_eq!(gadget.note.as_deref(), Some("{}"));

        let row = object(json!({"id": 42, "name": "[1,2]", "active": "false"}));
        let gadget: Gadget = decode_row(&GADGETS, &row).unwrap();
        assert_eq!(gadget.id, "42");
        assert_eq!(gadget.name, "[1,2]");
    }

    #[test]
    fn test_decode_rejects_non_object_blob() {
        let row = object(json!({"id": "x", "name": "n", "active": "true", "json_data": "[1]"}));
        assert!(matches!(decode_row::<Gadget>(&GADGETS, &row), Err(RowError::BlobNotObject)));
    }

    #[test]
    fn test_row_object_pads_short_rows() {
        let row = row_object(&GADGETS.header_row(), &[json!("only-id")]);
        assert_eq!(row.len(), 4);
        assert_eq!(row["name"], json!(""));
    }
}
