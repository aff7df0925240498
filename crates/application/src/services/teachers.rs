//! Teacher endpoints.

use std::sync::Arc;

use atelier_domain::models::TeacherOption;

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Teacher lookups, mainly for class assignment pickers.
pub struct TeacherService {
    client: Arc<ApiClient>,
}

impl TeacherService {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// All teachers, id and name only.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn list(&self) -> ApiResult<Vec<TeacherOption>> {
        self.client.get("/teachers").await
    }
}
