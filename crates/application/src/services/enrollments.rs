//! Enrollment endpoints.

use std::sync::Arc;

use atelier_domain::Page;
use atelier_domain::models::{CreateEnrollment, Enrollment, EnrollmentStatus, UpdateDiscount};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Query parameters for a class's enrollment list.
#[derive(Debug, Clone, Default)]
pub struct ClassEnrollmentsQuery {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Rows per page.
    pub per_page: Option<u32>,
    /// Filter by lifecycle state.
    pub status: Option<EnrollmentStatus>,
}

impl ClassEnrollmentsQuery {
    fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("perPage".to_string(), per_page.to_string()));
        }
        if let Some(status) = self.status {
            let value = match status {
                EnrollmentStatus::Active => "active",
                EnrollmentStatus::Withdrawn => "withdrawn",
            };
            pairs.push(("status".to_string(), value.to_string()));
        }
        pairs
    }
}

/// Enrollment operations; capacity and pricing stay server-side.
pub struct EnrollmentService {
    client: Arc<ApiClient>,
}

impl EnrollmentService {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Enrolls a student in a class.
    ///
    /// # Errors
    ///
    /// A full class comes back as an API failure from the server.
    pub async fn enroll(
        &self,
        student_id: i64,
        enrollment: &CreateEnrollment,
    ) -> ApiResult<Enrollment> {
        self.client
            .post(&format!("/students/{student_id}/enrollments"), enrollment)
            .await
    }

    /// All enrollments of one student.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn student_enrollments(&self, student_id: i64) -> ApiResult<Vec<Enrollment>> {
        self.client
            .get(&format!("/students/{student_id}/enrollments"))
            .await
    }

    /// Enrollments of one class, paginated.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn class_enrollments(
        &self,
        class_id: i64,
        query: &ClassEnrollmentsQuery,
    ) -> ApiResult<Page<Enrollment>> {
        self.client
            .get_page(&format!("/classes/{class_id}/enrollments"), query.to_pairs())
            .await
    }

    /// Withdraws an enrollment.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn withdraw(&self, enrollment_id: i64) -> ApiResult<Enrollment> {
        self.client
            .patch(
                &format!("/enrollments/{enrollment_id}/withdraw"),
                &serde_json::json!({}),
            )
            .await
    }

    /// Updates an enrollment's discount; the effective price is recomputed
    /// server-side.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn update_discount(
        &self,
        enrollment_id: i64,
        discount: &UpdateDiscount,
    ) -> ApiResult<Enrollment> {
        self.client
            .patch(&format!("/enrollments/{enrollment_id}/discount"), discount)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn query_pairs_follow_the_wire_names() {
        let query = ClassEnrollmentsQuery {
            page: Some(2),
            per_page: Some(50),
            status: Some(EnrollmentStatus::Active),
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("perPage".to_string(), "50".to_string()),
                ("status".to_string(), "active".to_string()),
            ]
        );
    }
}
