//! Tagged spreadsheet cell value
//!
//! Raw cells coming back from the workbook are loosely typed: a boolean may
//! arrive as the text `"true"`, an array as its JSON text. [`CellValue`]
//! decides the type exactly once, in [`CellValue::from_cell`], so code past
//! the storage boundary never sniffs strings again.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

/// A single settings/entity cell after type resolution
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Bool(bool),
    Number(Number),
    Text(String),
    /// Array or object kept as structured JSON (stored as JSON text)
    Json(Value),
}

impl CellValue {
    /// Empty cell
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Resolve a raw cell read from storage.
    ///
    /// - `"true"` / `"false"` become booleans
    /// - text starting with `[` or `{` (after trimming) is parsed as JSON,
    ///   falling back to plain text when parsing fails
    /// - `null` is an empty cell
    pub fn from_cell(raw: &Value) -> Self {
        match raw {
            Value::Null => Self::empty(),
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.clone()),
            Value::String(s) => Self::sniff_text(s),
            Value::Array(_) | Value::Object(_) => Self::Json(raw.clone()),
        }
    }

    fn sniff_text(s: &str) -> Self {
        match s {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }
        let trimmed = s.trim();
        if (trimmed.starts_with('[') || trimmed.starts_with('{'))
            && let Ok(parsed) = serde_json::from_str::<Value>(trimmed)
        {
            return Self::Json(parsed);
        }
        Self::Text(s.to_string())
    }

    /// Wrap an in-memory leaf without any string sniffing.
    ///
    /// Used when flattening: a `String` stays `Text` even if it reads "true".
    pub fn from_leaf(value: &Value) -> Self {
        match value {
            Value::Null => Self::empty(),
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.clone()),
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => Self::Json(value.clone()),
        }
    }

    /// Raw cell representation written to storage (booleans as text)
    pub fn to_cell(&self) -> Value {
        match self {
            Self::Bool(b) => Value::String(b.to_string()),
            Self::Number(n) => Value::Number(n.clone()),
            Self::Text(s) => Value::String(s.clone()),
            Self::Json(v) => Value::String(v.to_string()),
        }
    }

    /// Structured value used when rebuilding nested settings or entities
    pub fn into_value(self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(b),
            Self::Number(n) => Value::Number(n),
            Self::Text(s) => Value::String(s),
            Self::Json(v) => v,
        }
    }

    /// Whether this is a blank cell
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Json(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_cell().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_cell(&raw))
    }
}
