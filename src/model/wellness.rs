//! Wellness habit model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of wellness habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WellnessCategory {
    #[default]
    Exercise,
    Nutrition,
    Sleep,
    #[serde(rename = "Self-Care")]
    SelfCare,
    #[serde(rename = "Mental Wellness")]
    MentalWellness,
    Hygiene,
    /// Never picked. Older data files store this as an empty string.
    #[serde(rename = "")]
    Unset,
}

impl WellnessCategory {
    /// All values, in dropdown order.
    pub const ALL: [Self; 6] = [
        Self::Exercise,
        Self::Nutrition,
        Self::Sleep,
        Self::SelfCare,
        Self::MentalWellness,
        Self::Hygiene,
    ];

    /// Display and storage name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exercise => "Exercise",
            Self::Nutrition => "Nutrition",
            Self::Sleep => "Sleep",
            Self::SelfCare => "Self-Care",
            Self::MentalWellness => "Mental Wellness",
            Self::Hygiene => "Hygiene",
            Self::Unset => "",
        }
    }
}

impl fmt::Display for WellnessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a habit is practised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Routine,
    Sometimes,
    #[serde(rename = "")]
    Unset,
}

impl Frequency {
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Routine, Self::Sometimes];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Routine => "Routine",
            Self::Sometimes => "Sometimes",
            Self::Unset => "",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wellness habit as stored on disk.
///
/// On disk the habit category is keyed `category` and the date `datetime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessRecord {
    /// Identifier, unique within the wellness collection
    pub id: u64,

    pub label: String,

    #[serde(rename = "category", alias = "wellness_category")]
    pub wellness_category: WellnessCategory,

    pub frequency: Frequency,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "datetime", alias = "timestamp", default)]
    pub timestamp: String,
}

/// Fields for a habit that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWellness {
    pub label: String,
    pub wellness_category: WellnessCategory,
    pub frequency: Frequency,
    pub description: String,
    pub timestamp: String,
}

impl NewWellness {
    pub(crate) fn into_record(self, id: u64) -> WellnessRecord {
        WellnessRecord {
            id,
            label: self.label,
            wellness_category: self.wellness_category,
            frequency: self.frequency,
            description: self.description,
            timestamp: self.timestamp,
        }
    }
}

/// Partial update for a habit. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WellnessPatch {
    pub label: Option<String>,
    pub wellness_category: Option<WellnessCategory>,
    pub frequency: Option<Frequency>,
    pub description: Option<String>,
    pub timestamp: Option<String>,
}

impl WellnessPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.wellness_category.is_none()
            && self.frequency.is_none()
            && self.description.is_none()
            && self.timestamp.is_none()
    }

    pub(crate) fn apply(self, record: &mut WellnessRecord) {
        if let Some(label) = self.label {
            record.label = label;
        }
        if let Some(category) = self.wellness_category {
            record.wellness_category = category;
        }
        if let Some(frequency) = self.frequency {
            record.frequency = frequency;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(timestamp) = self.timestamp {
            record.timestamp = timestamp;
        }
    }
}
