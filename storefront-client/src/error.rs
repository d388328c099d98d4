//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint refused the request (4xx or `status: "error"`)
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Transient failure (5xx, 408 or 429)
    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Entity could not be turned into a row record
    #[error("Row error: {0}")]
    Row(#[from] shared::RowError),

    /// Settings could not be flattened
    #[error("Settings error: {0}")]
    Settings(#[from] shared::StructuralError),
}

impl ClientError {
    /// Whether sending the same write again may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Http(e) => !e.is_builder() && !e.is_decode(),
            ClientError::Server { .. } => true,
            ClientError::Rejected(_)
            | ClientError::Serialization(_)
            | ClientError::Row(_)
            | ClientError::Settings(_) => false,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_server_side_failures_retry() {
        assert!(
            ClientError::Server {
                status: 503,
                body: String::new()
            }
            .is_retryable()
        );
        assert!(!ClientError::Rejected("bad payload".into()).is_retryable());
    }
}
