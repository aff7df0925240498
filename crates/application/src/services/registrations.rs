//! Registration (intake) endpoints.

use std::sync::Arc;

use serde::Deserialize;

use atelier_domain::models::{CreateRegistration, RegistrationCreated, RegistrationListItem};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Response of `GET /registrations`: rows plus a plain total.
///
/// This endpoint predates the shared pagination meta block and keeps its
/// own shape.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationList {
    /// The rows of the requested page.
    pub data: Vec<RegistrationListItem>,
    /// Total rows across all pages.
    pub total: u64,
}

/// Intake registrations: one guardian plus their students in one shot.
pub struct RegistrationService {
    client: Arc<ApiClient>,
}

impl RegistrationService {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Submits a combined guardian + students registration.
    ///
    /// # Errors
    ///
    /// Field-level validation failures come back as
    /// [`crate::ApiError::Validation`].
    pub async fn create(&self, registration: &CreateRegistration) -> ApiResult<RegistrationCreated> {
        self.client.post("/registrations", registration).await
    }

    /// Lists submitted registrations.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn list(
        &self,
        search: Option<String>,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> ApiResult<RegistrationList> {
        let mut pairs = Vec::new();
        if let Some(search) = search {
            pairs.push(("q".to_string(), search));
        }
        if let Some(page) = page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = page_size {
            pairs.push(("pageSize".to_string(), page_size.to_string()));
        }
        self.client.get_with("/registrations", pairs).await
    }
}
