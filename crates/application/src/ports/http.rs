//! HTTP transport port

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// HTTP method of a transport request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

/// A prepared outgoing request.
///
/// The URL is already absolute; query pairs and the JSON body are carried
/// separately so the adapter can encode them with its own client.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    /// Query pairs appended to the URL.
    pub query: Vec<(String, String)>,
    /// Header name/value pairs.
    pub headers: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a request with no query, headers or body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attaches query pairs.
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Sets a header, replacing any existing value (case-insensitive name).
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
    }

    /// Reads a header value (case-insensitive name).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A raw response: status plus unparsed body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from a status and body bytes.
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the body is not valid JSON
    /// of the expected shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Errors raised by a transport adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request exceeded its deadline.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Deadline that was exceeded.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Anything else the adapter could not classify.
    #[error("transport error: {0}")]
    Other(String),
}

/// Port for sending prepared requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the raw response.
    ///
    /// Non-2xx statuses are *not* errors at this layer; they come back as
    /// ordinary responses so the coordinator can inspect them.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was obtained at all.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_header_replaces_case_insensitively() {
        let mut request = HttpRequest::new(HttpMethod::Get, "https://example.test/api/v1/me");
        request.set_header("Authorization", "Bearer a1");
        request.set_header("authorization", "Bearer a2");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("AUTHORIZATION"), Some("Bearer a2"));
    }

    #[test]
    fn success_is_any_2xx() {
        assert!(HttpResponse::new(204, Vec::new()).is_success());
        assert!(!HttpResponse::new(301, Vec::new()).is_success());
        assert!(!HttpResponse::new(419, Vec::new()).is_success());
    }
}
