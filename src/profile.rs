//! User profile: read-only personal context supplied by the caller
//!
//! The profile comes from the platform's session service; the engine never
//! mutates it and only the personal-answer path reads it.

use chrono::NaiveDate;
use serde::Deserialize;

/// A participant's personal record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,

    /// Events the participant has registered for
    #[serde(default)]
    pub registered_events: Vec<String>,

    /// Events the participant actually attended
    #[serde(default)]
    pub attended_events: Vec<String>,

    /// Certificates earned so far
    #[serde(default)]
    pub certificates: Vec<Certificate>,

    /// Attendance rate in the range `0.0..=1.0`
    #[serde(default)]
    pub attendance_rate: f64,
}

impl UserProfile {
    /// Attendance rate as a whole-number percentage
    #[must_use]
    pub fn attendance_percent(&self) -> String {
        format!("{:.0}%", self.attendance_rate * 100.0)
    }
}

/// A certificate issued for a completed event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Certificate title, usually the event name
    pub title: String,

    /// Issue date
    pub issued_on: NaiveDate,
}
