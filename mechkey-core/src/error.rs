//! Core error types for `MechKey`.

use thiserror::Error;

/// Core error type for `MechKey` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The storage backend rejected or failed an operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error from a file-backed storage.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
