//! Sheet Server - 店面工作簿服务
//!
//! Serves the storefront's workbook endpoint: one `GET /?action=read` that
//! returns every sheet, and one `POST /` that runs a write action.
//!
//! # 模块结构
//!
//! ```text
//! sheet-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── sync/          # 全表同步、设置增量写入、快照
//! ├── workbook/      # 存储会话 (内存 / JSON 文件)
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod sync;
pub mod utils;
pub mod workbook;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use workbook::{FileWorkbook, MemoryWorkbook, Workbook, WorkbookError};

// Re-export logger
pub use utils::logger::init_logger_with_file;

/// Start logging according to `config`
pub fn setup_environment(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}
