//! Dashboard shapes

use serde::Deserialize;

/// Response of `GET /dashboard/stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardStats {
    /// Students with an active enrollment.
    pub active_learners: u32,
    /// Teachers with scheduled classes.
    pub active_instructors: u32,
    /// Sessions happening today.
    pub session_today: u32,
    /// New enrollments this month.
    pub enrollments_this_month: u32,
}

/// Course fragment embedded in a scheduled session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionCourse {
    /// Class id.
    pub id: i64,
    /// Class title.
    pub title: String,
}

/// Instructor fragment embedded in a scheduled session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionInstructor {
    /// Teacher id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// One row of `GET /sessions/today`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduledSession {
    /// Session id.
    pub id: i64,
    /// The class being taught.
    pub course: SessionCourse,
    /// Who teaches it.
    pub instructor: SessionInstructor,
    /// Start timestamp, RFC 3339.
    pub starts_at: String,
    /// End timestamp, RFC 3339.
    pub ends_at: String,
    /// Room, when assigned.
    #[serde(default)]
    pub room: Option<String>,
    /// "scheduled", "completed" or "canceled".
    pub status: String,
}

/// One row of `GET /hours/instructors`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyInstructorHours {
    /// Teacher id.
    pub instructor_id: i64,
    /// Teacher name.
    pub instructor_name: String,
    /// Teaching hours in the queried week.
    pub hours: f64,
}
