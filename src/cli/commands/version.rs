//! Version command: build info and the data file layout this build reads.

use crate::error::Result;
use crate::storage::{CLINICAL_FILE, WELLNESS_FILE};
use serde::Serialize;

#[derive(Serialize)]
struct VersionOutput {
    version: &'static str,
    profile: &'static str,
    clinical_file: &'static str,
    wellness_file: &'static str,
}

impl VersionOutput {
    fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            profile: if cfg!(debug_assertions) { "debug" } else { "release" },
            clinical_file: CLINICAL_FILE,
            wellness_file: WELLNESS_FILE,
        }
    }
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let info = VersionOutput::current();

    if json {
        println!("{}", serde_json::to_string(&info)?);
    } else {
        println!("HealthHub {} ({})", info.version, info.profile);
        println!("Data files: {}, {}", info.clinical_file, info.wellness_file);
    }
    Ok(())
}
