//! Sheet layouts and the entity row codec

mod row;
mod schema;

pub use row::{FlatRow, decode_row, encode_row, merge_promoted, row_object};
pub use schema::{JSON_DATA_COLUMN, SETTINGS_SCHEMA, SheetEntity, SheetSchema};
