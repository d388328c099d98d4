use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use super::memory::{Sheets, set_cell};
use super::{Row, Workbook, WorkbookResult};

/// JSON 文件工作簿
///
/// Keeps the workbook in memory and rewrites the whole file after every
/// mutation (temp file + rename, so a crash never leaves a torn file).
#[derive(Debug)]
pub struct FileWorkbook {
    path: PathBuf,
    sheets: RwLock<Sheets>,
}

impl FileWorkbook {
    /// Open `path`, starting empty when the file does not exist yet
    pub async fn open(path: impl Into<PathBuf>) -> WorkbookResult<Self> {
        let path = path.into();
        let sheets = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "Workbook file not found, starting empty");
                Sheets::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            sheets: RwLock::new(sheets),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, sheets: &Sheets) -> WorkbookResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(sheets)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl Workbook for FileWorkbook {
    async fn read_rows(&self, sheet: &str) -> WorkbookResult<Vec<Row>> {
        Ok(self.sheets.read().await.get(sheet).cloned().unwrap_or_default())
    }

    async fn clear(&self, sheet: &str) -> WorkbookResult<()> {
        let mut sheets = self.sheets.write().await;
        sheets.insert(sheet.to_string(), Vec::new());
        self.persist(&sheets).await
    }

    async fn append_rows(&self, sheet: &str, rows: Vec<Row>) -> WorkbookResult<()> {
        let mut sheets = self.sheets.write().await;
        sheets.entry(sheet.to_string()).or_default().extend(rows);
        self.persist(&sheets).await
    }

    async fn update_cell(
        &self,
        sheet: &str,
        row: usize,
        column: usize,
        value: Value,
    ) -> WorkbookResult<()> {
        let mut sheets = self.sheets.write().await;
        set_cell(&mut sheets, sheet, row, column, value)?;
        self.persist(&sheets).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::WorkbookError;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_rows_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("workbook.json");

        let wb = FileWorkbook::open(&path).await.unwrap();
        wb.append_rows("Settings", vec![vec![json!("Key"), json!("Value")]])
            .await
            .unwrap();
        wb.append_rows("Settings", vec![vec![json!("hero.title"), json!("Hi")]])
            .await
            .unwrap();
        wb.update_cell("Settings", 2, 2, json!("Hello")).await.unwrap();
        drop(wb);

        let reopened = FileWorkbook::open(&path).await.unwrap();
        assert_eq!(
            reopened.read_rows("Settings").await.unwrap(),
            vec![
                vec![json!("Key"), json!("Value")],
                vec![json!("hero.title"), json!("Hello")]
            ]
        );
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("workbook.json");
        std::fs::write(&path, b"not json").unwrap();
        let err = FileWorkbook::open(&path).await.unwrap_err();
        assert!(matches!(err, WorkbookError::Corrupt(_)));
    }
}
