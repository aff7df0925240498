//! Class resource shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Teacher option for dropdowns and class assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherOption {
    /// Server-assigned id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email, when listed via `/teachers`.
    #[serde(default)]
    pub email: Option<String>,
    /// Role, e.g. "teacher" or "admin".
    #[serde(default)]
    pub role: Option<String>,
}

/// One row of `GET /classes`, also the detail shape of `GET /classes/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassListRow {
    /// Server-assigned id.
    pub id: i64,
    /// Class title.
    pub title: String,
    /// Description shown to staff.
    #[serde(default)]
    pub description: Option<String>,
    /// ISO weekday (1 = Monday .. 7 = Sunday).
    #[serde(default)]
    pub day_of_week: Option<u8>,
    /// Start time, `HH:MM`.
    #[serde(default)]
    pub starts_time: Option<String>,
    /// End time, `HH:MM`.
    #[serde(default)]
    pub ends_time: Option<String>,
    /// Seat capacity; the server enforces it at enrollment.
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Assigned teacher.
    #[serde(default)]
    pub teacher: Option<TeacherOption>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Detail alias; the server returns the same shape as the list row.
pub type ClassDetail = ClassListRow;

/// Body for `POST /classes` and `PUT /classes/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpsertClass {
    /// Class title.
    pub title: String,
    /// Description shown to staff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO weekday (1 = Monday .. 7 = Sunday).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,
    /// Start time, `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_time: Option<String>,
    /// End time, `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_time: Option<String>,
    /// Seat capacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Assigned teacher id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<i64>,
}
