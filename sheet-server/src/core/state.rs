use std::sync::Arc;

use crate::core::Config;
use crate::sync::SheetLocks;
use crate::workbook::{FileWorkbook, MemoryWorkbook, Workbook, WorkbookResult};

/// 服务器状态 - 持有工作簿会话和写锁
///
/// Cheap to clone; every handler gets the same workbook session.
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | workbook | 存储会话 |
/// | locks | 按工作表的写锁 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub workbook: Arc<dyn Workbook>,
    pub locks: Arc<SheetLocks>,
}

impl ServerState {
    /// Open the configured workbook (file-backed when `workbook_path` is set)
    pub async fn initialize(config: &Config) -> WorkbookResult<Self> {
        let workbook: Arc<dyn Workbook> = match &config.workbook_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using file workbook");
                Arc::new(FileWorkbook::open(path).await?)
            }
            None => {
                tracing::warn!("WORKBOOK_PATH not set, data lives in memory only");
                Arc::new(MemoryWorkbook::new())
            }
        };
        Ok(Self::with_workbook(config.clone(), workbook))
    }

    /// Build state around an existing workbook session
    pub fn with_workbook(config: Config, workbook: Arc<dyn Workbook>) -> Self {
        Self {
            config,
            workbook,
            locks: Arc::new(SheetLocks::new()),
        }
    }
}
