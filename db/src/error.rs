//! Error types for catalog storage operations.
//!
//! Provides a unified error type covering all failure modes: I/O, JSON and
//! YAML serialization, and atomic replacement of the data file.

use thiserror::Error;

/// Errors that can occur during store and configuration operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The temporary file could not be renamed over the data file.
    #[error("failed to replace data file: {0}")]
    PersistError(String),
}

impl From<tempfile::PersistError> for StoreError {
    fn from(err: tempfile::PersistError) -> Self {
        StoreError::PersistError(err.error.to_string())
    }
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
