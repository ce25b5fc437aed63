//! Input normalization for the enumerated record fields.
//!
//! The desktop form constrained severity, wellness category, and frequency
//! to dropdowns. On the command line they arrive as free text, so each is
//! resolved in three tiers: case-insensitive exact match → synonym lookup →
//! error with the closest valid value as a suggestion.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::{Frequency, RecordKind, Severity, WellnessCategory};

/// Rejected input and an optional suggestion.
pub type Rejection = (String, Option<String>);

// ── Synonym maps ─────────────────────────────────────────────

pub static SEVERITY_SYNONYMS: LazyLock<HashMap<&str, Severity>> = LazyLock::new(|| {
    [
        ("low", Severity::Mild),
        ("minor", Severity::Mild),
        ("light", Severity::Mild),
        ("medium", Severity::Moderate),
        ("mid", Severity::Moderate),
        ("average", Severity::Moderate),
        ("high", Severity::Critical),
        ("severe", Severity::Critical),
        ("serious", Severity::Critical),
        ("urgent", Severity::Critical),
        ("emergency", Severity::Critical),
    ]
    .into_iter()
    .collect()
});

pub static CATEGORY_SYNONYMS: LazyLock<HashMap<&str, WellnessCategory>> = LazyLock::new(|| {
    [
        ("workout", WellnessCategory::Exercise),
        ("fitness", WellnessCategory::Exercise),
        ("cardio", WellnessCategory::Exercise),
        ("diet", WellnessCategory::Nutrition),
        ("food", WellnessCategory::Nutrition),
        ("meal", WellnessCategory::Nutrition),
        ("rest", WellnessCategory::Sleep),
        ("nap", WellnessCategory::Sleep),
        ("selfcare", WellnessCategory::SelfCare),
        ("self care", WellnessCategory::SelfCare),
        ("self_care", WellnessCategory::SelfCare),
        ("mental", WellnessCategory::MentalWellness),
        ("mental-wellness", WellnessCategory::MentalWellness),
        ("mental_wellness", WellnessCategory::MentalWellness),
        ("mindfulness", WellnessCategory::MentalWellness),
        ("meditation", WellnessCategory::MentalWellness),
        ("cleanliness", WellnessCategory::Hygiene),
        ("grooming", WellnessCategory::Hygiene),
    ]
    .into_iter()
    .collect()
});

pub static FREQUENCY_SYNONYMS: LazyLock<HashMap<&str, Frequency>> = LazyLock::new(|| {
    [
        ("everyday", Frequency::Daily),
        ("every day", Frequency::Daily),
        ("day", Frequency::Daily),
        ("weekly", Frequency::Weekly),
        ("week", Frequency::Weekly),
        ("regular", Frequency::Routine),
        ("regularly", Frequency::Routine),
        ("habitual", Frequency::Routine),
        ("occasionally", Frequency::Sometimes),
        ("occasional", Frequency::Sometimes),
        ("rarely", Frequency::Sometimes),
    ]
    .into_iter()
    .collect()
});

pub static KIND_SYNONYMS: LazyLock<HashMap<&str, RecordKind>> = LazyLock::new(|| {
    [
        ("main", RecordKind::Clinical),
        ("record", RecordKind::Clinical),
        ("records", RecordKind::Clinical),
        ("health", RecordKind::Clinical),
        ("habit", RecordKind::Wellness),
        ("habits", RecordKind::Wellness),
    ]
    .into_iter()
    .collect()
});

// ── Normalizers ──────────────────────────────────────────────

/// Resolve `input` against `valid` names, then `synonyms`.
fn normalize<T: Copy>(
    input: &str,
    valid: &[(&'static str, T)],
    synonyms: &HashMap<&str, T>,
) -> Result<T, Rejection> {
    let lower = input.trim().to_lowercase();

    // Tier 1: exact (case-insensitive)
    if let Some((_, value)) = valid.iter().find(|(name, _)| name.to_lowercase() == lower) {
        return Ok(*value);
    }

    // Tier 2: synonym lookup
    if let Some(value) = synonyms.get(lower.as_str()) {
        return Ok(*value);
    }

    // Tier 3: suggestion
    let names: Vec<&str> = valid.iter().map(|(name, _)| *name).collect();
    Err((input.to_string(), find_closest_match(&lower, &names)))
}

/// Normalize a severity string.
///
/// Accepts "Mild", "moderate", "CRITICAL", or synonyms like "severe".
pub fn normalize_severity(input: &str) -> Result<Severity, Rejection> {
    let valid = Severity::ALL.map(|s| (s.as_str(), s));
    normalize(input, &valid, &SEVERITY_SYNONYMS)
}

/// Normalize a wellness category string.
pub fn normalize_wellness_category(input: &str) -> Result<WellnessCategory, Rejection> {
    let valid = WellnessCategory::ALL.map(|c| (c.as_str(), c));
    normalize(input, &valid, &CATEGORY_SYNONYMS)
}

/// Normalize a habit frequency string.
pub fn normalize_frequency(input: &str) -> Result<Frequency, Rejection> {
    let valid = Frequency::ALL.map(|f| (f.as_str(), f));
    normalize(input, &valid, &FREQUENCY_SYNONYMS)
}

/// Normalize a record kind ("clinical", "wellness", "habit", ...).
pub fn normalize_kind(input: &str) -> Result<RecordKind, Rejection> {
    let valid = [
        (RecordKind::Clinical.as_str(), RecordKind::Clinical),
        (RecordKind::Wellness.as_str(), RecordKind::Wellness),
    ];
    normalize(input, &valid, &KIND_SYNONYMS)
}

/// Find the closest valid name within edit distance 3.
fn find_closest_match(input: &str, valid: &[&str]) -> Option<String> {
    valid
        .iter()
        .map(|v| (levenshtein_distance(input, &v.to_lowercase()), *v))
        .filter(|(dist, _)| *dist <= 3)
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, v)| v.to_string())
}

// ── Levenshtein distance ─────────────────────────────────────

/// Compute the Levenshtein edit distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single-row optimization
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
