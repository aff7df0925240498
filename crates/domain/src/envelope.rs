//! The response envelope every API payload is nested in.
//!
//! Single-resource endpoints wrap their payload as
//! `{ status, message, data }`; list endpoints add a `meta` block with
//! pagination counters. Both shapes are parsed and validated here rather
//! than trusted, so a malformed or error-status body surfaces as a
//! [`DomainError`] instead of a confusing downstream decode failure.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{DomainError, DomainResult};

/// Envelope status discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    /// The request succeeded and `data` is meaningful.
    Success,
    /// The server reports a failure; `message` explains it.
    Error,
}

/// Envelope for single-resource endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Success or error.
    pub status: EnvelopeStatus,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// The wrapped payload.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwraps the payload, rejecting error envelopes and missing data.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EnvelopeFailure`] when the envelope carries an
    /// error status and [`DomainError::MissingData`] when `data` is absent.
    pub fn into_data(self) -> DomainResult<T> {
        match self.status {
            EnvelopeStatus::Error => Err(DomainError::EnvelopeFailure(self.message)),
            EnvelopeStatus::Success => self.data.ok_or(DomainError::MissingData),
        }
    }

    /// Unwraps an envelope whose `data` may legitimately be null.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EnvelopeFailure`] when the envelope carries an
    /// error status.
    pub fn into_optional_data(self) -> DomainResult<Option<T>> {
        match self.status {
            EnvelopeStatus::Error => Err(DomainError::EnvelopeFailure(self.message)),
            EnvelopeStatus::Success => Ok(self.data),
        }
    }
}

/// Pagination counters attached to list envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    /// 1-based page number.
    pub current_page: u32,
    /// Rows per page.
    pub per_page: u32,
    /// Total rows across all pages.
    pub total: u64,
    /// Last page number.
    pub last_page: u32,
}

/// Envelope for paginated list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedEnvelope<T> {
    /// Success or error.
    pub status: EnvelopeStatus,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// The page rows.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Pagination counters.
    pub meta: PageMeta,
}

impl<T> PaginatedEnvelope<T> {
    /// Unwraps the page, rejecting error envelopes.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EnvelopeFailure`] when the envelope carries an
    /// error status.
    pub fn into_page(self) -> DomainResult<Page<T>> {
        match self.status {
            EnvelopeStatus::Error => Err(DomainError::EnvelopeFailure(self.message)),
            EnvelopeStatus::Success => Ok(Page {
                data: self.data,
                meta: self.meta,
            }),
        }
    }
}

/// One page of a list endpoint, already validated.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The page rows.
    pub data: Vec<T>,
    /// Pagination counters.
    pub meta: PageMeta,
}

/// Failure payload shape, `{ status: "error", message, errors? }`.
///
/// The `errors` map carries field-level validation messages for 422
/// responses and is passed through untouched to form-mapping callers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FailureBody {
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Field name to validation messages.
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_envelope_unwraps_data() {
        let envelope: Envelope<Vec<i64>> = serde_json::from_value(serde_json::json!({
            "status": "success",
            "message": "ok",
            "data": [1, 2, 3]
        }))
        .unwrap();
        assert_eq!(envelope.into_data().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn error_envelope_is_rejected() {
        let envelope: Envelope<i64> = serde_json::from_value(serde_json::json!({
            "status": "error",
            "message": "boom",
            "data": null
        }))
        .unwrap();
        assert_eq!(
            envelope.into_data(),
            Err(DomainError::EnvelopeFailure("boom".to_string()))
        );
    }

    #[test]
    fn success_envelope_without_data_is_rejected() {
        let envelope: Envelope<i64> = serde_json::from_value(serde_json::json!({
            "status": "success",
            "message": "ok"
        }))
        .unwrap();
        assert_eq!(envelope.into_data(), Err(DomainError::MissingData));
    }

    #[test]
    fn void_endpoint_data_may_be_null() {
        let envelope: Envelope<serde_json::Value> = serde_json::from_value(serde_json::json!({
            "status": "success",
            "message": "logged out",
            "data": null
        }))
        .unwrap();
        assert_eq!(envelope.into_optional_data().unwrap(), None);
    }

    #[test]
    fn paginated_envelope_carries_meta() {
        let envelope: PaginatedEnvelope<String> = serde_json::from_value(serde_json::json!({
            "status": "success",
            "message": "",
            "data": ["a", "b"],
            "meta": { "current_page": 2, "per_page": 25, "total": 51, "last_page": 3 }
        }))
        .unwrap();
        let page = envelope.into_page().unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta.current_page, 2);
        assert_eq!(page.meta.last_page, 3);
    }

    #[test]
    fn failure_body_keeps_field_errors() {
        let body: FailureBody = serde_json::from_value(serde_json::json!({
            "status": "error",
            "message": "The given data was invalid.",
            "errors": { "email": ["The email field is required."] }
        }))
        .unwrap();
        let errors = body.errors.unwrap();
        assert_eq!(errors["email"], vec!["The email field is required."]);
    }
}
