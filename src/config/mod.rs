//! Configuration management.
//!
//! HealthHub has no config file. The only setting is where the two JSON
//! data files live, resolved from flags and environment variables:
//!
//! - **Production**: `~/.healthhub/data/`
//! - **Test mode**: `~/.healthhub/test/` (set `HH_TEST_DATA=1`)
//!
//! File names inside the directory are fixed (see [`crate::storage`]).

use crate::error::{Error, Result};

use std::path::{Path, PathBuf};

/// Get the global HealthHub directory location (`~/.healthhub/`).
#[must_use]
pub fn global_healthhub_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".healthhub"))
}

/// Whether a flag-style environment value counts as "on".
fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0" && value.to_lowercase() != "false"
}

/// Check if test mode is enabled.
///
/// Test mode is enabled by setting `HH_TEST_DATA=1` (or any truthy value).
/// This redirects all reads and writes to an isolated test directory.
#[must_use]
pub fn is_test_mode() -> bool {
    std::env::var("HH_TEST_DATA")
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

/// Get the test data directory (`~/.healthhub/test/`).
#[must_use]
pub fn test_data_dir() -> Option<PathBuf> {
    global_healthhub_dir().map(|dir| dir.join("test"))
}

/// Resolve the data directory.
///
/// Priority:
/// 1. `explicit_dir` (the `--data-dir` flag, which clap also fills from
///    `HH_DATA_DIR`)
/// 2. `HH_TEST_DATA` environment variable → test directory
/// 3. Global location: `~/.healthhub/data/`
///
/// Returns `None` if no home directory can be determined.
#[must_use]
pub fn resolve_data_dir(explicit_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit_dir {
        return Some(dir.to_path_buf());
    }

    if is_test_mode() {
        return test_data_dir();
    }

    global_healthhub_dir().map(|dir| dir.join("data"))
}

/// Like [`resolve_data_dir`], but a missing location is an error.
///
/// # Errors
///
/// Returns [`Error::Config`] if no directory could be resolved.
pub fn require_data_dir(explicit_dir: Option<&Path>) -> Result<PathBuf> {
    resolve_data_dir(explicit_dir).ok_or_else(|| {
        Error::Config("could not determine a home directory for HealthHub data".to_string())
    })
}
