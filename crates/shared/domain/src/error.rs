//! Domain-level errors.
//!
//! These errors represent failures of the content rules themselves.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

/// Domain-specific errors raised by content operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A write to the content store did not produce an item
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a write failure
    pub fn write_failed(msg: impl Into<String>) -> Self {
        DomainError::WriteFailed(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}
