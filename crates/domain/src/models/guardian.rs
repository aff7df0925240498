//! Guardian resource shapes

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::student::Address;

/// One row of `GET /guardians`.
#[derive(Debug, Clone, Deserialize)]
pub struct GuardianListRow {
    /// Server-assigned id.
    pub id: i64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// How many students this guardian is linked to.
    pub students_count: u32,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Precomputed full name, when the server sends one.
    #[serde(default)]
    pub name: Option<String>,
}

/// Student link embedded in a guardian detail.
#[derive(Debug, Clone, Deserialize)]
pub struct GuardianStudentLink {
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

/// Full detail of `GET /guardians/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GuardianDetail {
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
    /// Postal address.
    #[serde(default)]
    pub address: Option<Address>,
    /// Preferred contact channel.
    #[serde(default)]
    pub preferred_contact: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Newsletter opt-in.
    #[serde(default)]
    pub newsletter_consent: Option<bool>,
    /// Linked students.
    #[serde(default)]
    pub students: Vec<GuardianStudentLink>,
}
