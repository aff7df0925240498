//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. It owns the only
//! `reqwest::Client` in the process and translates between the port's
//! request/response types and reqwest's.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};

use atelier_application::ports::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError,
};

/// Default per-request deadline, in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Transport adapter backed by `reqwest::Client`.
///
/// Non-2xx statuses come back as ordinary responses; only failures that
/// produced no response at all surface as [`TransportError`].
pub struct ReqwestTransport {
    client: Client,
    timeout_ms: u64,
}

impl ReqwestTransport {
    /// Creates a transport with default settings.
    ///
    /// Default configuration:
    /// - Request timeout: 30 seconds
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be built.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("Atelier/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        })
    }

    /// Creates a transport around a pre-configured reqwest client.
    ///
    /// `timeout_ms` must match the client's timeout; it is only used to
    /// label timeout errors.
    #[must_use]
    pub const fn with_client(client: Client, timeout_ms: u64) -> Self {
        Self { client, timeout_ms }
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }
        if error.is_connect() {
            return TransportError::ConnectionFailed(error.to_string());
        }
        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout_ms))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?
            .to_vec();

        Ok(HttpResponse::new(status, body))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn method_mapping_is_total() {
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Put),
            Method::PUT
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Patch),
            Method::PATCH
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn client_builds_with_defaults() {
        assert!(ReqwestTransport::new().is_ok());
    }

    #[tokio::test]
    async fn invalid_url_is_rejected_before_sending() {
        let transport = ReqwestTransport::new().unwrap();
        let request = HttpRequest::new(HttpMethod::Get, "not a url");
        let result = transport.send(request).await;
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }
}
