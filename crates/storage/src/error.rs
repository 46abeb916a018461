//! Error types for the storage crate.

use thiserror::Error;

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur while persisting or loading the catalog.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON
    #[error("Invalid catalog file: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file is not valid TOML
    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    /// Storage path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),
}

/// Error code for integration with tooling that reports numeric codes.
/// Range: 20xxx for storage errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// Filesystem error
    Io = 20001,
    /// Catalog parse error
    Json = 20002,
    /// Config parse error
    Config = 20003,
    /// Storage path is not a directory
    NotADirectory = 20004,
}

impl StorageError {
    /// Returns the error code for this error.
    pub fn code(&self) -> StorageErrorCode {
        match self {
            StorageError::Io(_) => StorageErrorCode::Io,
            StorageError::Json(_) => StorageErrorCode::Json,
            StorageError::Config(_) => StorageErrorCode::Config,
            StorageError::NotADirectory(_) => StorageErrorCode::NotADirectory,
        }
    }
}
