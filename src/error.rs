//! Unified error types for Minutemizer.
//!
//! Callers see one error type. The only domain failure is
//! [`Error::EmptyList`]; everything else is an encoding or backend problem.

use minutemizer_storage::StorageError;
use thiserror::Error;

/// All Minutemizer errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Tried to delete from a list that is absent or empty
    #[error("the minutemen list is empty")]
    EmptyList,

    /// Stored bytes could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// In-memory value could not be encoded
    #[error("encode error: {0}")]
    Encode(String),

    /// Backend failure other than plain I/O
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Minutemizer operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is the empty-list domain error.
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Error::EmptyList)
    }

    /// Check if this is an encoding or decoding error.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::Encode(_))
    }

    pub(crate) fn decode(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }

    pub(crate) fn encode(e: serde_json::Error) -> Self {
        Error::Encode(e.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Io(io_err) => Error::Io(io_err),
            StorageError::Corrupt(msg) => Error::Storage(format!("corruption: {}", msg)),
            StorageError::InvalidSuite(name) => {
                Error::Storage(format!("invalid suite name: {:?}", name))
            }
        }
    }
}
