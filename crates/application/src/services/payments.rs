//! Payment endpoints.
//!
//! Payment state transitions (pay, waive) are server-side; this service
//! only requests them.

use std::sync::Arc;

use atelier_domain::models::{DueStatus, MonthlyDue, PaymentSummary};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Dues and payment summaries.
pub struct PaymentService {
    client: Arc<ApiClient>,
}

impl PaymentService {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Payment summary for one student.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn summary(&self, student_id: i64) -> ApiResult<PaymentSummary> {
        self.client
            .get(&format!("/students/{student_id}/payment-summary"))
            .await
    }

    /// Monthly dues for one student, optionally filtered by state.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn dues(
        &self,
        student_id: i64,
        status: Option<DueStatus>,
    ) -> ApiResult<Vec<MonthlyDue>> {
        let mut pairs = Vec::new();
        if let Some(status) = status {
            let value = match status {
                DueStatus::Pending => "pending",
                DueStatus::Paid => "paid",
                DueStatus::Waived => "waived",
                DueStatus::Cancelled => "cancelled",
            };
            pairs.push(("status".to_string(), value.to_string()));
        }
        self.client
            .get_with(&format!("/students/{student_id}/monthly-dues"), pairs)
            .await
    }

    /// Marks a due as paid.
    ///
    /// # Errors
    ///
    /// An invalid transition comes back as an API failure.
    pub async fn pay_due(&self, due_id: i64) -> ApiResult<MonthlyDue> {
        self.client
            .patch(&format!("/monthly-dues/{due_id}/pay"), &serde_json::json!({}))
            .await
    }

    /// Waives a due, with an optional reason.
    ///
    /// # Errors
    ///
    /// An invalid transition comes back as an API failure.
    pub async fn waive_due(&self, due_id: i64, notes: Option<String>) -> ApiResult<MonthlyDue> {
        self.client
            .patch(
                &format!("/monthly-dues/{due_id}/waive"),
                &serde_json::json!({ "notes": notes }),
            )
            .await
    }
}
