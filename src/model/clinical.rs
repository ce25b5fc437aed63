//! Clinical record model.
//!
//! Clinical records are one-off health events: symptoms, medicine doses,
//! appointments. The `category` is free text so users can invent their own
//! groupings; only `severity` is constrained.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a clinical event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Mild,
    Moderate,
    Critical,
}

impl Severity {
    /// All values, in dropdown order.
    pub const ALL: [Self; 3] = [Self::Mild, Self::Moderate, Self::Critical];

    /// Display and storage name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clinical event as stored on disk.
///
/// Field names on disk follow the legacy `healthhub_records.json` layout
/// (`type`, `datetime`); the descriptive names are accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalRecord {
    /// Identifier, unique within the clinical collection
    pub id: u64,

    /// Short label (e.g. "Fever")
    pub label: String,

    /// Free-text classification ("Symptoms", "Medicine", "Appointment", ...)
    #[serde(rename = "type", alias = "category")]
    pub category: String,

    /// Multi-line description
    #[serde(default)]
    pub description: String,

    /// Free-text date/time, not validated
    #[serde(rename = "datetime", alias = "timestamp", default)]
    pub timestamp: String,

    /// Event severity
    pub severity: Severity,
}

/// Fields for a clinical record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClinical {
    pub label: String,
    pub category: String,
    pub description: String,
    pub timestamp: String,
    pub severity: Severity,
}

impl NewClinical {
    pub(crate) fn into_record(self, id: u64) -> ClinicalRecord {
        ClinicalRecord {
            id,
            label: self.label,
            category: self.category,
            description: self.description,
            timestamp: self.timestamp,
            severity: self.severity,
        }
    }
}

/// Partial update for a clinical record. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClinicalPatch {
    pub label: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub timestamp: Option<String>,
    pub severity: Option<Severity>,
}

impl ClinicalPatch {
    /// True when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.timestamp.is_none()
            && self.severity.is_none()
    }

    pub(crate) fn apply(self, record: &mut ClinicalRecord) {
        if let Some(label) = self.label {
            record.label = label;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(timestamp) = self.timestamp {
            record.timestamp = timestamp;
        }
        if let Some(severity) = self.severity {
            record.severity = severity;
        }
    }
}
