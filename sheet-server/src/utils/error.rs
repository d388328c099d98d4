//! 统一错误处理
//!
//! Every failure on the endpoint is answered with the write-response shape:
//!
//! ```json
//! { "status": "error", "message": "..." }
//! ```
//!
//! 4xx means the request itself is wrong and must not be retried; 5xx means
//! the workbook failed and the caller may retry.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::protocol::WriteResponse;
use tracing::{error, warn};

use crate::workbook::WorkbookError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 请求错误 (4xx) ==========
    #[error("Unknown action: {0}")]
    /// 未知操作 (400)
    UnknownAction(String),

    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Workbook error: {0}")]
    /// 存储错误 (500)
    Workbook(#[from] WorkbookError),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownAction(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Workbook(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }
        (status, Json(WriteResponse::error(self.to_string()))).into_response()
    }
}

/// Result type for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_4xx() {
        assert_eq!(
            AppError::validation("bad payload").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnknownAction("write".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_storage_errors_are_5xx() {
        let err: AppError = WorkbookError::Unavailable("quota".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Workbook error: workbook unavailable: quota");
    }
}
