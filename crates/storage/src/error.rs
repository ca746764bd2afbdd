//! Storage errors

use thiserror::Error;

/// Errors raised by a backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error while reading or writing a suite file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Suite file exists but cannot be parsed
    #[error("corrupt suite file: {0}")]
    Corrupt(String),

    /// Suite name is empty or would escape its directory
    #[error("invalid suite name: {0:?}")]
    InvalidSuite(String),
}

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, StorageError>;
