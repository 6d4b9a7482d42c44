//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No task exists with the given id.
    #[error("task not found: {0}")]
    NotFound(i64),

    /// A validation error on client-supplied input.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
