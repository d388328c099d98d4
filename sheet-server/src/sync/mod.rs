//! 同步操作 - workbook read, entity full sync, settings upsert
//!
//! Every function takes the storage session explicitly. Callers serialize
//! writes to one sheet through [`SheetLocks`]; nothing here locks.

mod entities;
mod locks;
mod settings;
mod snapshot;

pub use entities::full_sync;
pub use locks::SheetLocks;
pub use settings::{settings_rows, upsert_settings};
pub use snapshot::read_snapshot;
