//! Typed per-resource services.
//!
//! Each service is a thin wrapper over [`crate::ApiClient`]: it names the
//! endpoints, shapes the query strings, and leaves every business rule to
//! the server.

mod attendance;
mod auth;
mod classes;
mod dashboard;
mod enrollments;
mod guardians;
mod payments;
mod registrations;
mod students;
mod teachers;

pub use attendance::{AttendanceHistoryQuery, AttendanceService};
pub use auth::AuthService;
pub use classes::ClassService;
pub use dashboard::DashboardService;
pub use enrollments::{ClassEnrollmentsQuery, EnrollmentService};
pub use guardians::GuardianService;
pub use payments::PaymentService;
pub use registrations::{RegistrationList, RegistrationService};
pub use students::{CreatedStudent, StudentService};
pub use teachers::TeacherService;

/// Query parameters shared by the searchable list endpoints.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Free-text search.
    pub query: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Rows per page.
    pub page_size: Option<u32>,
}

impl ListQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(query) = &self.query {
            pairs.push(("query".to_string(), query.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize".to_string(), page_size.to_string()));
        }
        pairs
    }
}
