//! Visitor record model and form payload
//!
//! Field names are a wire contract with the hosted record store and
//! must not change: existing data is stored under exactly these keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A visitor check-in record as stored by the record store.
///
/// `id` and `in_time` are assigned by the store at insert and never
/// change afterwards; there is no update or delete path for records.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VisitorRecord {
    pub id: Uuid,
    pub name: String,
    pub mobile_number: String,
    /// Absent college is distinct from empty string and renders as a
    /// placeholder in the dashboard
    pub college: Option<String>,
    pub person_to_meet: String,
    pub purpose_of_visit: String,
    /// Write-only from the form, never shown in the list view
    #[serde(default)]
    pub comment_feedback: Option<String>,
    /// Captured at submission time, never shown in the dashboard
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Creation timestamp as the store serialized it. Kept as a raw
    /// string: a malformed value must degrade to placeholders in
    /// display and export, not fail deserialization of the whole list.
    #[serde(default)]
    pub in_time: Option<String>,
}

impl VisitorRecord {
    /// Parse `in_time` as an absolute instant. `None` for absent or
    /// malformed values.
    pub fn parsed_in_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.in_time.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Payload of a public check-in form submission.
///
/// `id` and `in_time` are server-assigned and deliberately absent.
/// Geolocation is opportunistic: the form submits whatever coordinates
/// it managed to capture, and their absence never blocks the insert.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewVisitor {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 10, max = 10, message = "Mobile number must be 10 digits"))]
    pub mobile_number: String,
    #[validate(length(min = 1, message = "Please select a college"))]
    pub college: String,
    #[validate(length(min = 1, message = "Person to meet is required"))]
    pub person_to_meet: String,
    #[validate(length(min = 1, message = "Purpose of visit is required"))]
    pub purpose_of_visit: String,
    #[serde(default)]
    pub comment_feedback: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}
