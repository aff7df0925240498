//! Payment resource shapes
//!
//! All amounts and state transitions are computed server-side; the client
//! only displays them and requests transitions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Monthly due lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueStatus {
    /// Not yet paid.
    Pending,
    /// Paid in full.
    Paid,
    /// Waived by staff.
    Waived,
    /// Cancelled (e.g. withdrawal mid-month).
    Cancelled,
}

/// Class fragment embedded in a due.
#[derive(Debug, Clone, Deserialize)]
pub struct DueClass {
    /// Class id.
    pub id: i64,
    /// Class title.
    pub title: String,
}

/// One monthly due, from `GET /students/{id}/monthly-dues`.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyDue {
    /// Server-assigned id.
    pub id: i64,
    /// Student id.
    pub student_id: i64,
    /// Class id.
    pub class_id: i64,
    /// Billing year.
    pub period_year: i32,
    /// Billing month, 1..=12.
    pub period_month: u8,
    /// Human-readable period label.
    pub period_label: String,
    /// Amount owed.
    pub amount: f64,
    /// Lifecycle state.
    pub status: DueStatus,
    /// When the due was paid.
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    /// Free-form notes (e.g. waive reason).
    #[serde(default)]
    pub notes: Option<String>,
    /// Class fragment, when expanded.
    #[serde(default)]
    pub class: Option<DueClass>,
}

/// One outstanding due inside a payment summary.
#[derive(Debug, Clone, Deserialize)]
pub struct OutstandingDue {
    /// Due id.
    pub id: i64,
    /// Period label.
    pub period: String,
    /// Amount owed.
    pub amount: f64,
    /// The class the due belongs to.
    pub class: DueClass,
}

/// Annual-registration state inside a payment summary.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationStatus {
    /// "active", "inactive" or "expired".
    pub status: String,
    /// When the registration expires.
    #[serde(default)]
    pub expires_at: Option<NaiveDate>,
}

/// Response of `GET /students/{id}/payment-summary`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentSummary {
    /// Student id.
    pub student_id: i64,
    /// Total paid to date.
    pub total_paid: f64,
    /// Total outstanding.
    pub total_outstanding: f64,
    /// Annual-registration state.
    #[serde(default)]
    pub registration: Option<RegistrationStatus>,
    /// Dues still open.
    #[serde(default)]
    pub outstanding_dues: Vec<OutstandingDue>,
}
