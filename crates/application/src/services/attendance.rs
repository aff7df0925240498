//! Attendance endpoints.

use std::sync::Arc;

use chrono::NaiveDate;

use atelier_domain::Page;
use atelier_domain::models::{
    AttendanceHistorySession, AttendanceRoster, AttendanceSummary, StoreAttendancePayload,
    TodaySession,
};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Query parameters for the attendance history of a class.
#[derive(Debug, Clone, Default)]
pub struct AttendanceHistoryQuery {
    /// Inclusive start date.
    pub from: Option<NaiveDate>,
    /// Inclusive end date.
    pub to: Option<NaiveDate>,
    /// Rows per page.
    pub per_page: Option<u32>,
    /// 1-based page number.
    pub page: Option<u32>,
}

impl AttendanceHistoryQuery {
    fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = self.from {
            pairs.push(("from".to_string(), from.to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to".to_string(), to.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("perPage".to_string(), per_page.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        pairs
    }
}

/// Attendance rosters and history; validity rules stay server-side.
pub struct AttendanceService {
    client: Arc<ApiClient>,
}

impl AttendanceService {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Today's sessions with attendance counters.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn today_sessions(&self) -> ApiResult<Vec<TodaySession>> {
        self.client.get("/dashboard/today-sessions").await
    }

    /// The roster for one session.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn roster(&self, session_id: i64) -> ApiResult<AttendanceRoster> {
        self.client
            .get(&format!("/sessions/{session_id}/attendance"))
            .await
    }

    /// Records attendance for a whole session.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn store(
        &self,
        session_id: i64,
        payload: &StoreAttendancePayload,
    ) -> ApiResult<()> {
        self.client
            .post_unit(&format!("/sessions/{session_id}/attendance"), payload)
            .await
    }

    /// Past sessions of a class with per-student marks, paginated.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn history(
        &self,
        class_id: i64,
        query: &AttendanceHistoryQuery,
    ) -> ApiResult<Page<AttendanceHistorySession>> {
        self.client
            .get_page(
                &format!("/classes/{class_id}/attendance-history"),
                query.to_pairs(),
            )
            .await
    }

    /// Per-student attendance aggregates for a class.
    ///
    /// # Errors
    ///
    /// Propagates API failures.
    pub async fn summary(
        &self,
        class_id: i64,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> ApiResult<AttendanceSummary> {
        let mut pairs = Vec::new();
        if let Some(from) = from {
            pairs.push(("from".to_string(), from.to_string()));
        }
        if let Some(to) = to {
            pairs.push(("to".to_string(), to.to_string()));
        }
        self.client
            .get_with(&format!("/classes/{class_id}/attendance-summary"), pairs)
            .await
    }
}
