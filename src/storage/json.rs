//! JSON file storage.
//!
//! Each collection lives in its own file as a pretty-printed JSON array
//! (four-space indent, same layout the desktop app wrote). The two files
//! are written independently, each atomically.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::model::{ClinicalRecord, WellnessRecord};
use crate::storage::file::atomic_write;
use crate::storage::{Collections, Persistence};

/// File name of the clinical collection.
pub const CLINICAL_FILE: &str = "healthhub_records.json";

/// File name of the wellness collection.
pub const WELLNESS_FILE: &str = "healthhub_wellness.json";

/// Stores each collection as a JSON array file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    clinical_path: PathBuf,
    wellness_path: PathBuf,
}

impl JsonFileStorage {
    /// Use the standard file names inside `dir`.
    ///
    /// The directory is created on first flush, not here.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_paths(dir.join(CLINICAL_FILE), dir.join(WELLNESS_FILE))
    }

    /// Use explicit paths for both artifacts.
    #[must_use]
    pub fn with_paths(clinical_path: PathBuf, wellness_path: PathBuf) -> Self {
        Self {
            clinical_path,
            wellness_path,
        }
    }

    #[must_use]
    pub fn clinical_path(&self) -> &Path {
        &self.clinical_path
    }

    #[must_use]
    pub fn wellness_path(&self) -> &Path {
        &self.wellness_path
    }
}

impl Persistence for JsonFileStorage {
    fn load(&self) -> Result<Collections> {
        let clinical = read_collection(&self.clinical_path)?;
        let wellness = read_collection(&self.wellness_path)?;
        debug!(
            clinical = clinical.len(),
            wellness = wellness.len(),
            "Loaded record collections"
        );
        Ok(Collections { clinical, wellness })
    }

    fn flush(&self, clinical: &[ClinicalRecord], wellness: &[WellnessRecord]) -> Result<()> {
        atomic_write(&self.clinical_path, &to_pretty_json(&clinical)?)?;
        atomic_write(&self.wellness_path, &to_pretty_json(&wellness)?)?;
        debug!(
            clinical = clinical.len(),
            wellness = wellness.len(),
            "Flushed record collections"
        );
        Ok(())
    }
}

/// Read one JSON array artifact.
///
/// A missing or blank file is an empty collection.
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            trace!(path = %path.display(), "Data file absent, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|e| Error::CorruptData {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
