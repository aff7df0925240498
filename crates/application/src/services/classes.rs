//! Class endpoints.

use std::sync::Arc;

use atelier_domain::Page;
use atelier_domain::models::{ClassDetail, ClassListRow, UpsertClass};

use crate::client::ApiClient;
use crate::error::ApiResult;

use super::ListQuery;

/// Class CRUD.
pub struct ClassService {
    client: Arc<ApiClient>,
}

impl ClassService {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetches one class.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn get(&self, id: i64) -> ApiResult<ClassDetail> {
        self.client.get(&format!("/classes/{id}")).await
    }

    /// Lists classes, searchable and paginated.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn list(&self, query: &ListQuery) -> ApiResult<Page<ClassListRow>> {
        self.client.get_page("/classes", query.to_pairs()).await
    }

    /// Creates a class.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn create(&self, class: &UpsertClass) -> ApiResult<ClassDetail> {
        self.client.post("/classes", class).await
    }

    /// Updates a class; capacity checks stay server-side.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn update(&self, id: i64, class: &UpsertClass) -> ApiResult<ClassDetail> {
        self.client.put(&format!("/classes/{id}"), class).await
    }
}
