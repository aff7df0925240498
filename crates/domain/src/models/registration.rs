//! Registration (guardian + students intake) shapes

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::student::{Address, ContactPreference, Interest, Level};

/// Guardian part of an intake registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationGuardian {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
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
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Newsletter opt-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter_consent: Option<bool>,
}

/// One student in an intake registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationStudent {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_media: Option<bool>,
}

/// Body for `POST /registrations`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRegistration {
    /// The guardian being registered.
    pub guardian: RegistrationGuardian,
    /// The students being registered under that guardian.
    pub students: Vec<RegistrationStudent>,
    /// Whether the guardian is also a student themselves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_is_student: Option<bool>,
}

/// Response of `POST /registrations`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationCreated {
    /// Id of the created guardian.
    pub guardian_id: i64,
    /// Ids of the created students.
    pub student_ids: Vec<i64>,
}

/// One row of `GET /registrations`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationListItem {
    /// Server-assigned id.
    pub id: i64,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
    /// Guardian full name.
    pub guardian_name: String,
    /// Guardian phone.
    #[serde(default)]
    pub guardian_phone: Option<String>,
    /// Guardian email.
    #[serde(default)]
    pub guardian_email: Option<String>,
    /// Short summary of the registered students.
    #[serde(default)]
    pub student_summary: Option<String>,
}
