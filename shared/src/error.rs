//! Error types for the shared crate

use thiserror::Error;

/// Settings object cannot be flattened
#[derive(Debug, Error)]
pub enum StructuralError {
    /// Nesting exceeded the depth guard (usually a runaway or cyclic builder)
    #[error("settings nested deeper than {limit} levels at '{path}'")]
    TooDeep { path: String, limit: usize },

    /// Root value was not an object and no prefix was given to name it
    #[error("settings root must be an object")]
    NotAnObject,

    /// General settings key that would be read back into another partition
    #[error("settings key '{key}' is reserved for the '{partition}' partition")]
    ReservedKey {
        key: String,
        partition: &'static str,
    },

    /// Key that is written but can never be read back
    #[error("settings key '{key}' is malformed: {reason}")]
    MalformedKey { key: String, reason: &'static str },
}

/// Entity row cannot be encoded or decoded
#[derive(Debug, Error)]
pub enum RowError {
    #[error("json_data is not valid JSON: {0}")]
    Blob(#[source] serde_json::Error),

    #[error("json_data must hold a JSON object")]
    BlobNotObject,

    #[error("entity must serialize to a JSON object")]
    NotAnObject,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
