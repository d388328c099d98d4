//! Storefront Client - HTTP client for the sheet server
//!
//! Reads the whole workbook into typed entities and settings, and pushes
//! entity lists and settings objects back through the write actions.

pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod store;

pub use config::ClientConfig;
pub use decode::{DecodedWorkbook, decode_rows};
pub use error::{ClientError, ClientResult};
pub use http::SheetClient;
pub use store::StoreState;

// Re-export shared types for convenience
pub use shared::protocol::{ActionName, WriteResponse};
pub use shared::settings::SettingsBundle;
