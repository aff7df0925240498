//! Dashboard and scheduling overview endpoints.

use std::sync::Arc;

use atelier_domain::models::{DashboardStats, ScheduledSession, WeeklyInstructorHours};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Headline counters and today's schedule.
pub struct DashboardService {
    client: Arc<ApiClient>,
}

impl DashboardService {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Headline counters for the landing view.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn stats(&self) -> ApiResult<DashboardStats> {
        self.client.get("/dashboard/stats").await
    }

    /// All sessions scheduled for today.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn sessions_today(&self) -> ApiResult<Vec<ScheduledSession>> {
        self.client.get("/sessions/today").await
    }

    /// Teaching hours per instructor for one ISO week.
    ///
    /// `week` uses the `YYYY-Www` form; the server defaults to the current
    /// week when absent.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn weekly_instructor_hours(
        &self,
        week: Option<String>,
    ) -> ApiResult<Vec<WeeklyInstructorHours>> {
        let mut pairs = Vec::new();
        if let Some(week) = week {
            pairs.push(("week".to_string(), week));
        }
        self.client.get_with("/hours/instructors", pairs).await
    }
}
