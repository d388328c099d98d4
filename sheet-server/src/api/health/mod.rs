//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 (含工作簿读取延迟) |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::Instant;

use crate::core::ServerState;
use shared::sheet::SETTINGS_SCHEMA;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | error)
    status: &'static str,
    version: &'static str,
    /// 工作簿读取延迟 (毫秒)
    #[serde(skip_serializing_if = "Option::is_none")]
    workbook_latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let started = Instant::now();
    let probe = state.workbook.read_rows(SETTINGS_SCHEMA.sheet).await;
    let response = match probe {
        Ok(_) => HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            workbook_latency_ms: Some(started.elapsed().as_millis() as u64),
            message: None,
        },
        Err(e) => HealthResponse {
            status: "error",
            version: env!("CARGO_PKG_VERSION"),
            workbook_latency_ms: None,
            message: Some(e.to_string()),
        },
    };
    Json(response)
}
