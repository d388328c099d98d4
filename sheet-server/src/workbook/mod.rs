//! 工作簿存储层
//!
//! The workbook is a set of named sheets, each a list of rows of raw cells.
//! Row 1 of every sheet is its header. The handle is built once in
//! [`crate::core::ServerState`] and passed explicitly to every sync operation.
//!
//! None of the operations are transactional: a multi-call write that fails
//! midway leaves whatever was written so far.

mod file;
mod memory;

pub use file::FileWorkbook;
pub use memory::MemoryWorkbook;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Raw row of cells
pub type Row = Vec<Value>;

#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("cell {sheet}!R{row}C{column} is outside the sheet")]
    OutOfRange {
        sheet: String,
        row: usize,
        column: usize,
    },

    #[error("workbook I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("workbook file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Backend refused the write (quota, transient fault)
    #[error("workbook unavailable: {0}")]
    Unavailable(String),
}

pub type WorkbookResult<T> = Result<T, WorkbookError>;

/// Storage session handle
#[async_trait]
pub trait Workbook: Send + Sync {
    /// All rows of `sheet`, header included; empty if the sheet does not exist
    async fn read_rows(&self, sheet: &str) -> WorkbookResult<Vec<Row>>;

    /// Remove every row of `sheet`, creating it if needed
    async fn clear(&self, sheet: &str) -> WorkbookResult<()>;

    /// Append rows at the end of `sheet` in one batch
    async fn append_rows(&self, sheet: &str, rows: Vec<Row>) -> WorkbookResult<()>;

    /// Overwrite a single cell; `row` and `column` are 1-based
    async fn update_cell(
        &self,
        sheet: &str,
        row: usize,
        column: usize,
        value: Value,
    ) -> WorkbookResult<()>;
}
