//! 工作簿接口
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /?action=read | GET | 读取整个工作簿 |
//! | / | POST | `{action, payload}` 写入 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::apply_write;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(handler::read).post(handler::write))
}
