//! Attendance resource shapes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance mark for one student in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// Student attended.
    Present,
    /// Student was absent.
    Absent,
}

/// One of today's sessions, from `GET /dashboard/today-sessions`.
#[derive(Debug, Clone, Deserialize)]
pub struct TodaySession {
    /// Session id.
    pub id: i64,
    /// Class id.
    pub class_id: i64,
    /// Session date.
    pub date: NaiveDate,
    /// Start time, `HH:MM`.
    pub starts_time: String,
    /// End time, `HH:MM`.
    pub ends_time: String,
    /// Class title.
    pub class_title: String,
    /// Assigned teacher name.
    #[serde(default)]
    pub teacher_name: Option<String>,
    /// Who actually conducted the session, once recorded.
    #[serde(default)]
    pub conducted_by_name: Option<String>,
    /// Enrolled students.
    pub enrolled_count: u32,
    /// Students marked present so far.
    pub attended_count: u32,
}

/// Session header inside a roster.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionInfo {
    /// Session id.
    pub id: i64,
    /// Session date.
    pub date: NaiveDate,
    /// Class title.
    pub class_title: String,
    /// Assigned teacher name.
    #[serde(default)]
    pub teacher_name: Option<String>,
    /// Assigned teacher id.
    #[serde(default)]
    pub teacher_id: Option<i64>,
    /// Conductor id, once recorded.
    #[serde(default)]
    pub conducted_by: Option<i64>,
    /// Conductor name, once recorded.
    #[serde(default)]
    pub conducted_by_name: Option<String>,
}

/// One student on the roster; debt fields are computed server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterStudent {
    /// Student id.
    pub student_id: i64,
    /// Full name.
    pub name: String,
    /// Attendance mark, `None` until recorded.
    #[serde(default)]
    pub attendance_status: Option<AttendanceStatus>,
    /// Whether the student has outstanding dues.
    pub has_debt: bool,
    /// Outstanding amount.
    pub outstanding_amount: f64,
}

/// Debt summary line shown next to the roster.
#[derive(Debug, Clone, Deserialize)]
pub struct DebtSummaryItem {
    /// Student id.
    pub student_id: i64,
    /// Full name.
    pub name: String,
    /// Outstanding amount.
    pub outstanding_amount: f64,
}

/// Teacher option offered in the conductor dropdown.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterTeacher {
    /// Teacher id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// Response of `GET /sessions/{id}/attendance`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRoster {
    /// Session header.
    pub session: SessionInfo,
    /// Teacher options for the conductor dropdown.
    #[serde(default)]
    pub teachers: Vec<RosterTeacher>,
    /// Debt summary for the enrolled students.
    #[serde(default)]
    pub debt_summary: Vec<DebtSummaryItem>,
    /// The roster rows.
    #[serde(default)]
    pub students: Vec<RosterStudent>,
}

/// One attendance mark in a store payload.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEntry {
    /// Student id.
    pub student_id: i64,
    /// Mark.
    pub status: AttendanceStatus,
    /// Optional per-student note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for `POST /sessions/{id}/attendance`.
#[derive(Debug, Clone, Serialize)]
pub struct StoreAttendancePayload {
    /// Teacher who conducted the session.
    pub conducted_by: i64,
    /// Marks for the whole roster.
    pub attendances: Vec<AttendanceEntry>,
}

/// One student's mark inside a history session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionAttendanceRecord {
    /// Student id.
    pub student_id: i64,
    /// Full name.
    pub student_name: String,
    /// Mark.
    pub status: AttendanceStatus,
}

/// One past session, from `GET /classes/{id}/attendance-history`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceHistorySession {
    /// Session id.
    pub session_id: i64,
    /// Session date.
    pub date: NaiveDate,
    /// Start time, `HH:MM`.
    pub starts_time: String,
    /// End time, `HH:MM`.
    pub ends_time: String,
    /// Conductor name.
    #[serde(default)]
    pub conducted_by_name: Option<String>,
    /// Students marked present.
    pub present_count: u32,
    /// Students marked absent.
    pub absent_count: u32,
    /// Per-student marks.
    #[serde(default)]
    pub attendances: Vec<SessionAttendanceRecord>,
}

/// One student's aggregate inside an attendance summary.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentAttendanceSummary {
    /// Student id.
    pub student_id: i64,
    /// Full name.
    pub student_name: String,
    /// Sessions attended.
    pub total_present: u32,
    /// Sessions missed.
    pub total_absent: u32,
    /// Attendance rate, 0..=1.
    pub attendance_rate: f64,
}

/// Response of `GET /classes/{id}/attendance-summary`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceSummary {
    /// Class id.
    pub class_id: i64,
    /// Class title.
    pub class_title: String,
    /// Sessions held in the queried window.
    pub total_sessions: u32,
    /// Per-student aggregates.
    #[serde(default)]
    pub students: Vec<StudentAttendanceSummary>,
}
