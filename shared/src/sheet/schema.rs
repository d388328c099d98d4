//! Fixed per-sheet column layouts

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::row::{FlatRow, decode_row};
use crate::error::RowError;

/// Name of the blob column holding every non-promoted field
pub const JSON_DATA_COLUMN: &str = "json_data";

/// Ordered header list of one sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSchema {
    pub sheet: &'static str,
    pub headers: &'static [&'static str],
    /// Promoted columns typed as text; read back verbatim, never sniffed
    pub text_columns: &'static [&'static str],
}

impl SheetSchema {
    /// Whether `field` has its own column (the blob column itself does not count)
    pub fn is_promoted(&self, field: &str) -> bool {
        field != JSON_DATA_COLUMN && self.headers.contains(&field)
    }

    /// Whether `field` holds free text
    pub fn is_text(&self, field: &str) -> bool {
        self.text_columns.contains(&field)
    }

    /// Header row as raw cells
    pub fn header_row(&self) -> Vec<Value> {
        self.headers
            .iter()
            .map(|h| Value::String((*h).to_string()))
            .collect()
    }
}

/// Layout of the settings sheet
pub const SETTINGS_SCHEMA: SheetSchema = SheetSchema {
    sheet: "Settings",
    headers: &["Key", "Value"],
    text_columns: &["Key"],
};

/// A typed entity stored one-per-row in its own sheet
pub trait SheetEntity: Serialize + DeserializeOwned {
    const SCHEMA: SheetSchema;

    /// Serialize into a field map ready for [`super::encode_row`]
    fn to_record(&self) -> Result<Map<String, Value>, RowError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(RowError::NotAnObject),
        }
    }

    /// Rebuild from a flat row object read back from the sheet
    fn from_row(row: &FlatRow) -> Result<Self, RowError> {
        decode_row(&Self::SCHEMA, row)
    }
}
