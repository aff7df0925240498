//! Envelope-unwrapping API client.
//!
//! Every server payload arrives wrapped in `{ status, message, data }`.
//! This client joins the base URL with a resource path, routes the request
//! through the [`Authenticator`], and validates the envelope on receipt
//! instead of trusting the shape.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use atelier_domain::{Envelope, FailureBody, Page, PaginatedEnvelope};

use crate::error::{ApiError, ApiResult};
use crate::ports::{HttpMethod, HttpRequest, HttpResponse};
use crate::session::Authenticator;

/// Typed access to the back-office API.
pub struct ApiClient {
    authenticator: Arc<Authenticator>,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client rooted at `base_url` (e.g. `https://host/api/v1`).
    #[must_use]
    pub const fn new(authenticator: Arc<Authenticator>, base_url: Url) -> Self {
        Self {
            authenticator,
            base_url,
        }
    }

    /// The coordinator behind this client.
    #[must_use]
    pub const fn authenticator(&self) -> &Arc<Authenticator> {
        &self.authenticator
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// GET a single resource.
    ///
    /// # Errors
    ///
    /// Propagates transport, session and decode failures as [`ApiError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get_with(path, Vec::new()).await
    }

    /// GET a single resource with query parameters.
    ///
    /// # Errors
    ///
    /// Propagates transport, session and decode failures as [`ApiError`].
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> ApiResult<T> {
        let response = self
            .send(HttpRequest::new(HttpMethod::Get, self.endpoint(path)).with_query(query))
            .await?;
        Self::decode(&response)
    }

    /// GET a paginated list, keeping the `meta` block.
    ///
    /// # Errors
    ///
    /// Propagates transport, session and decode failures as [`ApiError`].
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> ApiResult<Page<T>> {
        let response = self
            .send(HttpRequest::new(HttpMethod::Get, self.endpoint(path)).with_query(query))
            .await?;
        let envelope: PaginatedEnvelope<T> = response
            .json()
            .map_err(|error| ApiError::Decode(error.to_string()))?;
        Ok(envelope.into_page()?)
    }

    /// POST a body and decode the wrapped response.
    ///
    /// # Errors
    ///
    /// Propagates transport, session, validation and decode failures.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ApiResult<T> {
        let response = self.send_with_body(HttpMethod::Post, path, body).await?;
        Self::decode(&response)
    }

    /// POST a body to a void endpoint.
    ///
    /// # Errors
    ///
    /// Propagates transport, session, validation and decode failures.
    pub async fn post_unit(&self, path: &str, body: &impl Serialize) -> ApiResult<()> {
        let response = self.send_with_body(HttpMethod::Post, path, body).await?;
        Self::decode_unit(&response)
    }

    /// PUT a body and decode the wrapped response.
    ///
    /// # Errors
    ///
    /// Propagates transport, session, validation and decode failures.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ApiResult<T> {
        let response = self.send_with_body(HttpMethod::Put, path, body).await?;
        Self::decode(&response)
    }

    /// PATCH a body and decode the wrapped response.
    ///
    /// # Errors
    ///
    /// Propagates transport, session, validation and decode failures.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ApiResult<T> {
        let response = self.send_with_body(HttpMethod::Patch, path, body).await?;
        Self::decode(&response)
    }

    /// PATCH a body to a void endpoint.
    ///
    /// # Errors
    ///
    /// Propagates transport, session, validation and decode failures.
    pub async fn patch_unit(&self, path: &str, body: &impl Serialize) -> ApiResult<()> {
        let response = self.send_with_body(HttpMethod::Patch, path, body).await?;
        Self::decode_unit(&response)
    }

    /// DELETE a resource.
    ///
    /// # Errors
    ///
    /// Propagates transport, session, validation and decode failures.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self
            .send(HttpRequest::new(HttpMethod::Delete, self.endpoint(path)))
            .await?;
        Self::decode_unit(&response)
    }

    async fn send_with_body(
        &self,
        method: HttpMethod,
        path: &str,
        body: &impl Serialize,
    ) -> ApiResult<HttpResponse> {
        let body = serde_json::to_value(body)
            .map_err(|error| ApiError::Decode(format!("could not encode body: {error}")))?;
        self.send(HttpRequest::new(method, self.endpoint(path)).with_json(body))
            .await
    }

    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let response = self.authenticator.execute(request).await?;
        Self::check_status(response)
    }

    /// Maps non-success statuses to the error taxonomy. 422 keeps its
    /// field-level error map for form mapping; everything else collapses to
    /// a status + message pair.
    fn check_status(response: HttpResponse) -> ApiResult<HttpResponse> {
        if response.is_success() {
            return Ok(response);
        }
        let failure: FailureBody = response.json().unwrap_or_default();
        if response.status == 422 {
            return Err(ApiError::Validation {
                message: failure
                    .message
                    .unwrap_or_else(|| "The given data was invalid.".to_string()),
                errors: failure.errors.unwrap_or_default(),
            });
        }
        Err(ApiError::Api {
            status: response.status,
            message: failure
                .message
                .unwrap_or_else(|| "Request failed".to_string()),
        })
    }

    fn decode<T: DeserializeOwned>(response: &HttpResponse) -> ApiResult<T> {
        let envelope: Envelope<T> = response
            .json()
            .map_err(|error| ApiError::Decode(error.to_string()))?;
        Ok(envelope.into_data()?)
    }

    fn decode_unit(response: &HttpResponse) -> ApiResult<()> {
        let envelope: Envelope<serde_json::Value> = response
            .json()
            .map_err(|error| ApiError::Decode(error.to_string()))?;
        envelope.into_optional_data()?;
        Ok(())
    }
}
