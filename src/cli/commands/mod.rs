//! Command implementations.

pub mod completions;
pub mod habit;
pub mod list;
pub mod record;
pub mod status;
pub mod version;

use crate::config::require_data_dir;
use crate::error::{Error, Result};
use crate::model::Record;
use crate::storage::JsonFileStorage;
use crate::store::RecordStore;
use crate::validate::Rejection;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

/// Open the record store in the resolved data directory.
pub(crate) fn open_store(data_dir: Option<&PathBuf>) -> Result<RecordStore<JsonFileStorage>> {
    let dir = require_data_dir(data_dir.map(PathBuf::as_path))?;
    debug!(dir = %dir.display(), "Opening record store");
    RecordStore::open(JsonFileStorage::in_dir(&dir))
}

/// Default date/time for new records: local time, minute precision.
pub(crate) fn now_datetime() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

/// Turn a validation rejection into a user-facing error.
pub(crate) fn invalid(field: &str, (input, suggestion): Rejection) -> Error {
    match suggestion {
        Some(s) => Error::InvalidArgument(format!("Invalid {field} '{input}' (did you mean '{s}'?)")),
        None => Error::InvalidArgument(format!("Invalid {field} '{input}'")),
    }
}

/// Print one record as labelled lines.
pub(crate) fn print_record(record: &Record) {
    let heading = format!("{} #{}", record.kind(), record.id());
    println!("{} {}", heading.bold(), record.label());
    println!("  Type:          {}", record.type_display());
    println!("  Date/Time:     {}", record.timestamp());
    match record {
        Record::Clinical(r) => println!("  Severity:      {}", r.severity),
        Record::Wellness(r) => println!("  Frequency:     {}", r.frequency),
    }
    if !record.description().is_empty() {
        println!("  Description:");
        for line in record.description().lines() {
            println!("    {line}");
        }
    }
}
