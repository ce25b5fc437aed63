//! Data models for HealthHub.
//!
//! This module contains the two record types and the tagged wrappers the
//! store uses to pass either kind through one API:
//! - ClinicalRecord (symptoms, medicine, appointments)
//! - WellnessRecord (habits)

pub mod clinical;
pub mod wellness;

pub use clinical::{ClinicalPatch, ClinicalRecord, NewClinical, Severity};
pub use wellness::{Frequency, NewWellness, WellnessCategory, WellnessPatch, WellnessRecord};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator selecting a collection and its id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Clinical,
    Wellness,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clinical => "clinical",
            Self::Wellness => "wellness",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record of either kind, tagged with its source collection.
///
/// Serializes as the inner record plus a `kind` field, e.g.
/// `{"kind":"clinical","id":1,"label":"Fever",...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Clinical(ClinicalRecord),
    Wellness(WellnessRecord),
}

impl Record {
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Clinical(_) => RecordKind::Clinical,
            Self::Wellness(_) => RecordKind::Wellness,
        }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Clinical(r) => r.id,
            Self::Wellness(r) => r.id,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Clinical(r) => &r.label,
            Self::Wellness(r) => &r.label,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Clinical(r) => &r.description,
            Self::Wellness(r) => &r.description,
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        match self {
            Self::Clinical(r) => &r.timestamp,
            Self::Wellness(r) => &r.timestamp,
        }
    }

    /// Text for the dashboard "Type" column.
    ///
    /// Clinical records show their category; habits show
    /// `Wellness (<category>)`.
    #[must_use]
    pub fn type_display(&self) -> String {
        match self {
            Self::Clinical(r) => r.category.clone(),
            Self::Wellness(r) => format!("Wellness ({})", r.wellness_category),
        }
    }

    /// Text for the dashboard "Severity/Freq" column.
    #[must_use]
    pub const fn level_display(&self) -> &'static str {
        match self {
            Self::Clinical(r) => r.severity.as_str(),
            Self::Wellness(r) => r.frequency.as_str(),
        }
    }
}

/// Fields for a record about to be created. The variant selects the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewRecord {
    Clinical(NewClinical),
    Wellness(NewWellness),
}

impl NewRecord {
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Clinical(_) => RecordKind::Clinical,
            Self::Wellness(_) => RecordKind::Wellness,
        }
    }
}

/// Partial update for a record. The variant must match the target kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordPatch {
    Clinical(ClinicalPatch),
    Wellness(WellnessPatch),
}

impl RecordPatch {
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Clinical(_) => RecordKind::Clinical,
            Self::Wellness(_) => RecordKind::Wellness,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Clinical(p) => p.is_empty(),
            Self::Wellness(p) => p.is_empty(),
        }
    }

    /// The label this patch would set, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Clinical(p) => p.label.as_deref(),
            Self::Wellness(p) => p.label.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_kind_tag() {
        let record = Record::Wellness(WellnessRecord {
            id: 1,
            label: "Walk".to_string(),
            wellness_category: WellnessCategory::Exercise,
            frequency: Frequency::Daily,
            description: "30 min".to_string(),
            timestamp: "2024-01-01 07:00".to_string(),
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["kind"], "wellness");
        assert_eq!(value["id"], 1);
        assert_eq!(value["category"], "Exercise");
    }

    #[test]
    fn test_display_columns() {
        let clinical = Record::Clinical(ClinicalRecord {
            id: 2,
            label: "Checkup".to_string(),
            category: "Appointment".to_string(),
            description: String::new(),
            timestamp: "Friday".to_string(),
            severity: Severity::Mild,
        });
        assert_eq!(clinical.type_display(), "Appointment");
        assert_eq!(clinical.level_display(), "Mild");
        assert_eq!(clinical.kind(), RecordKind::Clinical);

        let habit = Record::Wellness(WellnessRecord {
            id: 2,
            label: "Sleep early".to_string(),
            wellness_category: WellnessCategory::Sleep,
            frequency: Frequency::Routine,
            description: String::new(),
            timestamp: String::new(),
        });
        assert_eq!(habit.type_display(), "Wellness (Sleep)");
        assert_eq!(habit.level_display(), "Routine");
    }

    #[test]
    fn test_kind_ordering_puts_clinical_first() {
        assert!(RecordKind::Clinical < RecordKind::Wellness);
    }
}
