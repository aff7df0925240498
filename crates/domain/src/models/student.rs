//! Student resource shapes

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// How a student or guardian prefers to be contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPreference {
    /// Contact by email.
    Email,
    /// Contact by text message.
    Sms,
    /// Contact by phone call.
    Phone,
}

/// Disciplines a student is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    /// Painting classes.
    Painting,
    /// Ceramics classes.
    Ceramics,
    /// Drawing classes.
    Drawing,
}

/// Skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Just starting out.
    Beginner,
    /// Some prior experience.
    Intermediate,
    /// Experienced student.
    Advanced,
}

/// Postal address fragment; every field optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street and number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Guardian data submitted inline with a new student.
#[derive(Debug, Clone, Serialize)]
pub struct GuardianIntake {
    /// Full name.
    pub name: String,
    /// Relation to the student (father, mother, guardian).
    pub relation: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Consent flags captured at intake.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentConsents {
    /// Consent to be contacted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication: Option<bool>,
    /// Consent for photos and works usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<bool>,
    /// Free-form medical notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_note: Option<String>,
}

/// Body for `POST /students`.
///
/// Guardians are required for minors; the server enforces that rule.
#[derive(Debug, Clone, Serialize)]
pub struct CreateStudent {
    /// Full name.
    pub name: String,
    /// Birth date.
    pub birthdate: NaiveDate,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Preferred contact channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_contact: Option<ContactPreference>,
    /// Disciplines of interest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<Interest>>,
    /// Skill level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Guardians, when the student is a minor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardians: Option<Vec<GuardianIntake>>,
    /// Consent flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consents: Option<StudentConsents>,
}

/// Body for `PUT /students/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStudent {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Birth date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    /// Registration date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<NaiveDate>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Annual membership flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_member: Option<bool>,
    /// Postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Skill level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    /// Disciplines of interest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<Interest>>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Medical notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_note: Option<String>,
    /// Consent for photos and works usage.
    pub consent_media: bool,
}

/// One row of `GET /students`.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentListRow {
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
    /// Skill level.
    #[serde(default)]
    pub level: Option<Level>,
    /// Annual membership flag.
    #[serde(default)]
    pub is_member: Option<bool>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Guardian link embedded in a student detail.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentGuardian {
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
    /// Preferred contact channel.
    #[serde(default)]
    pub preferred_contact: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<Address>,
}

/// Full detail of `GET /students/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentDetail {
    /// Server-assigned id.
    pub id: i64,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Full name.
    pub name: String,
    /// Birth date.
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Annual membership flag.
    #[serde(default)]
    pub is_member: Option<bool>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<Address>,
    /// Skill level.
    #[serde(default)]
    pub level: Option<Level>,
    /// Disciplines of interest.
    #[serde(default)]
    pub interests: Option<Vec<Interest>>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Medical notes.
    #[serde(default)]
    pub medical_note: Option<String>,
    /// Consent for photos and works usage.
    #[serde(default)]
    pub consent_media: Option<bool>,
    /// Linked guardians.
    #[serde(default)]
    pub guardians: Option<Vec<StudentGuardian>>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for `POST /students/{id}/memberships`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMembership {
    /// Membership start date.
    pub starts_at: NaiveDate,
    /// Membership end date.
    pub ends_at: NaiveDate,
    /// When the membership fee was paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<NaiveDate>,
}

/// One membership in a student's history.
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipHistoryItem {
    /// Membership start date.
    pub starts_at: NaiveDate,
    /// Membership end date.
    pub ends_at: NaiveDate,
    /// Whether the membership is currently active.
    pub active: bool,
}

/// Response of `GET /students/{id}/history`.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentHistory {
    /// The student the history belongs to.
    pub student_id: i64,
    /// Memberships, most recent first.
    #[serde(default)]
    pub memberships: Vec<MembershipHistoryItem>,
}
