//! Enrollment resource shapes

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Enrollment lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    /// Currently enrolled.
    Active,
    /// Withdrawn from the class.
    Withdrawn,
}

/// Class fragment embedded in an enrollment.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentClass {
    /// Server-assigned id.
    pub id: i64,
    /// Class title.
    pub title: String,
    /// "weekly" or "workshop".
    #[serde(default)]
    pub r#type: Option<String>,
    /// Whether the class is running.
    #[serde(default)]
    pub active: Option<bool>,
    /// ISO weekday.
    #[serde(default)]
    pub day_of_week: Option<u8>,
    /// Start time, `HH:MM`.
    #[serde(default)]
    pub starts_time: Option<String>,
    /// End time, `HH:MM`.
    #[serde(default)]
    pub ends_time: Option<String>,
    /// Seat capacity.
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// Student fragment embedded in an enrollment.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentStudent {
    /// Server-assigned id.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
}

/// An enrollment row; pricing fields are computed server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct Enrollment {
    /// Server-assigned id.
    pub id: i64,
    /// Enrolled student id.
    pub student_id: i64,
    /// Class id.
    pub class_id: i64,
    /// Lifecycle state.
    pub status: EnrollmentStatus,
    /// Enrollment date.
    pub enrolled_at: NaiveDate,
    /// Withdrawal date, once withdrawn.
    #[serde(default)]
    pub withdrawn_at: Option<NaiveDate>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Percentage discount, if any.
    #[serde(default)]
    pub discount_percent: Option<f64>,
    /// Flat discount amount, if any.
    #[serde(default)]
    pub discount_amount: Option<f64>,
    /// Reason for the discount.
    #[serde(default)]
    pub discount_note: Option<String>,
    /// Monthly price after discounts, computed server-side.
    #[serde(default)]
    pub effective_price: Option<f64>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Student fragment, when expanded.
    #[serde(default)]
    pub student: Option<EnrollmentStudent>,
    /// Class fragment, when expanded.
    #[serde(default)]
    pub course_class: Option<EnrollmentClass>,
}

/// Body for `POST /students/{id}/enrollments`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEnrollment {
    /// Class to enroll into.
    pub class_id: i64,
    /// Enrollment date; defaults to today server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrolled_at: Option<NaiveDate>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Percentage discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    /// Flat discount amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    /// Reason for the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_note: Option<String>,
}

/// Body for `PATCH /enrollments/{id}/discount`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDiscount {
    /// Percentage discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    /// Flat discount amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    /// Reason for the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_note: Option<String>,
}
