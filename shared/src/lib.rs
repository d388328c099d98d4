//! Shared types for the storefront workbook
//!
//! Used by both `sheet-server` and `storefront-client`: the tagged cell value,
//! the settings flatten/unflatten bridge, the entity row codec, entity
//! models and the wire protocol.

pub mod cell;
pub mod error;
pub mod models;
pub mod protocol;
pub mod settings;
pub mod sheet;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cell::CellValue;
pub use error::{RowError, StructuralError};
pub use protocol::{ActionName, ActionTarget, WorkbookSnapshot, WriteRequest, WriteResponse};
pub use settings::{FlatSettings, SettingsBundle};
pub use sheet::{FlatRow, SheetEntity, SheetSchema};
