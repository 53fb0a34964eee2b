//! Common error types for document store backends

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in document store backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// Document name was empty or absent
    #[error("Document name is empty")]
    EmptyName,

    /// Document name is not a single path component
    #[error("Invalid document name: {0}")]
    InvalidName(String),

    /// No document stored under this name
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Underlying filesystem read/write failed
    #[error("Storage failure: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::EmptyName => 400,
            StoreError::InvalidName(_) => 400,
            StoreError::NotFound(_) => 404,
            StoreError::Io(_) => 500,
        }
    }
}
