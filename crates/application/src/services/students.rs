//! Student endpoints.

use std::sync::Arc;

use serde::Deserialize;

use atelier_domain::models::{
    CreateMembership, CreateStudent, StudentDetail, StudentHistory, StudentListRow, UpdateStudent,
};
use atelier_domain::Page;

use crate::client::ApiClient;
use crate::error::ApiResult;

use super::ListQuery;

/// Response of `POST /students`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CreatedStudent {
    /// Id of the created student.
    pub id: i64,
}

/// Student CRUD plus memberships and history.
pub struct StudentService {
    client: Arc<ApiClient>,
}

impl StudentService {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Creates a student; the server enforces guardian rules for minors.
    ///
    /// # Errors
    ///
    /// Field-level validation failures come back as
    /// [`crate::ApiError::Validation`].
    pub async fn create(&self, student: &CreateStudent) -> ApiResult<CreatedStudent> {
        self.client.post("/students", student).await
    }

    /// Fetches one student.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn get(&self, id: i64) -> ApiResult<StudentDetail> {
        self.client.get(&format!("/students/{id}")).await
    }

    /// Lists students, searchable and paginated.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn list(&self, query: &ListQuery) -> ApiResult<Page<StudentListRow>> {
        self.client.get_page("/students", query.to_pairs()).await
    }

    /// Updates a student.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn update(&self, id: i64, student: &UpdateStudent) -> ApiResult<StudentDetail> {
        self.client.put(&format!("/students/{id}"), student).await
    }

    /// Records an annual membership for a student.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn create_membership(&self, id: i64, membership: &CreateMembership) -> ApiResult<()> {
        self.client
            .post_unit(&format!("/students/{id}/memberships"), membership)
            .await
    }

    /// Fetches a student's membership history.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn history(&self, id: i64) -> ApiResult<StudentHistory> {
        self.client.get(&format!("/students/{id}/history")).await
    }
}
