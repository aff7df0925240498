//! Guardian endpoints.

use std::sync::Arc;

use atelier_domain::Page;
use atelier_domain::models::{GuardianDetail, GuardianListRow};

use crate::client::ApiClient;
use crate::error::ApiResult;

use super::ListQuery;

/// Guardian lookups.
pub struct GuardianService {
    client: Arc<ApiClient>,
}

impl GuardianService {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Lists guardians, searchable and paginated.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn list(&self, query: &ListQuery) -> ApiResult<Page<GuardianListRow>> {
        self.client.get_page("/guardians", query.to_pairs()).await
    }

    /// Fetches one guardian with their linked students.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn get(&self, id: i64) -> ApiResult<GuardianDetail> {
        self.client.get(&format!("/guardians/{id}")).await
    }
}
