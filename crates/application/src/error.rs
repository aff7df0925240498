//! Application error types

use std::collections::HashMap;

use thiserror::Error;

use atelier_domain::DomainError;

use crate::ports::TransportError;

/// Errors surfaced to callers of the API client and services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The session could not be recovered; the user has been logged out.
    ///
    /// Emitted once per failed request chain, together with a
    /// [`crate::session::SessionEvent::LoggedOut`] event.
    #[error("session expired")]
    SessionExpired,

    /// The server rejected the submitted fields (HTTP 422).
    ///
    /// The field map is passed through untouched so callers can map it to
    /// form controls.
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable summary.
        message: String,
        /// Field name to validation messages.
        errors: HashMap<String, Vec<String>>,
    },

    /// The response body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The response envelope was malformed or carried an error status.
    #[error("envelope error: {0}")]
    Envelope(#[from] DomainError),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the failure payload, or a generic fallback.
        message: String,
    },
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
