//! HealthHub - personal clinical and wellness record tracker
//!
//! This crate provides the record store behind the `hh` CLI tool.
//!
//! # Architecture
//!
//! - [`store`] - In-memory record store: id assignment, CRUD, merged views
//! - [`storage`] - Persistence trait and its JSON file implementation
//! - [`model`] - Record types (ClinicalRecord, WellnessRecord) and patches
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Data directory resolution
//! - [`validate`] - Normalization of enumerated inputs
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```no_run
//! use hh::model::{NewClinical, NewRecord, Severity};
//! use hh::storage::JsonFileStorage;
//! use hh::store::RecordStore;
//!
//! let mut store = RecordStore::open(JsonFileStorage::in_dir("/tmp/hh".as_ref()))?;
//! let id = store.create(NewRecord::Clinical(NewClinical {
//!     label: "Fever".to_string(),
//!     category: "Symptoms".to_string(),
//!     description: "High temp".to_string(),
//!     timestamp: "2024-01-01 09:00".to_string(),
//!     severity: Severity::Moderate,
//! }))?;
//! assert_eq!(store.list_all()[0].id(), id);
//! # Ok::<(), hh::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;
pub mod validate;

pub use error::{Error, Result};

/// Global silent mode flag for `--silent` output.
///
/// When set, mutate commands print only the record ID.
pub static SILENT: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Global CSV output flag (set when `--format csv`).
pub static CSV_OUTPUT: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Check if silent mode is active.
#[inline]
pub fn is_silent() -> bool {
    SILENT.load(std::sync::atomic::Ordering::Relaxed)
}

/// Check if CSV output is requested.
#[inline]
pub fn is_csv() -> bool {
    CSV_OUTPUT.load(std::sync::atomic::Ordering::Relaxed)
}

/// Escape a value for CSV output (wrap in quotes if it contains commas, quotes, or newlines).
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
