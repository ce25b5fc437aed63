//! Persistence layer for HealthHub.
//!
//! The store writes its entire state through a [`Persistence`]
//! implementation after every mutation and reads it back at startup.
//! There is one implementation, [`JsonFileStorage`], which keeps each
//! collection in its own JSON array file.
//!
//! # Submodules
//!
//! - [`file`] - Atomic write helpers
//! - [`json`] - JSON file storage implementation

pub mod file;
pub mod json;

pub use file::{atomic_write, file_size};
pub use json::{JsonFileStorage, CLINICAL_FILE, WELLNESS_FILE};

use crate::error::Result;
use crate::model::{ClinicalRecord, WellnessRecord};

/// Both collections as read from durable storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collections {
    pub clinical: Vec<ClinicalRecord>,
    pub wellness: Vec<WellnessRecord>,
}

/// Durable storage for the record store.
///
/// There is no partial persistence: `flush` always receives both
/// collections in full.
pub trait Persistence {
    /// Read both collections. Missing artifacts load as empty collections.
    ///
    /// # Errors
    ///
    /// Returns an error if an artifact exists but cannot be read or parsed.
    fn load(&self) -> Result<Collections>;

    /// Write both collections.
    ///
    /// # Errors
    ///
    /// Returns an error if either artifact cannot be written.
    fn flush(&self, clinical: &[ClinicalRecord], wellness: &[WellnessRecord]) -> Result<()>;
}
