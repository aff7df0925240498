//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while validating server payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The response envelope carried an error status.
    #[error("server reported failure: {0}")]
    EnvelopeFailure(String),

    /// The response envelope was missing its data payload.
    #[error("response envelope has no data")]
    MissingData,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
