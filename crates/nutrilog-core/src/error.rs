//! Error types for Nutrilog core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages. Most ledger operations are intentionally
//! permissive (see `parse`) and only fail on storage or serialization
//! problems.

use thiserror::Error;

/// Result type alias for Nutrilog operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for Nutrilog operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Blob store read/write error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Snapshot document could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}
