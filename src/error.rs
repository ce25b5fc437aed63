//! Error types for HealthHub.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=storage, 3=not_found, 4=validation, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers

use std::path::PathBuf;
use thiserror::Error;

use crate::model::RecordKind;

/// Result type alias for HealthHub operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Storage (exit 2)
    CorruptData,

    // Not Found (exit 3)
    RecordNotFound,

    // Validation (exit 4)
    InvalidArgument,
    RequiredField,
    KindMismatch,

    // Config (exit 7)
    ConfigError,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::CorruptData => "CORRUPT_DATA",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::RequiredField => "REQUIRED_FIELD",
            Self::KindMismatch => "KIND_MISMATCH",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::CorruptData => 2,
            Self::RecordNotFound => 3,
            Self::InvalidArgument | Self::RequiredField | Self::KindMismatch => 4,
            Self::ConfigError => 7,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether retrying with corrected input can succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument | Self::RequiredField | Self::KindMismatch
        )
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in HealthHub operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("No {kind} record with id {id}")]
    RecordNotFound { kind: RecordKind, id: u64 },

    #[error("Required field is blank: {0}")]
    RequiredField(&'static str),

    #[error("Patch for a {patch} record cannot be applied to a {target} record")]
    KindMismatch {
        target: RecordKind,
        patch: RecordKind,
    },

    #[error("Data file {path} is corrupt: {message}")]
    CorruptData { path: PathBuf, message: String },

    #[error("No {0} ids left: the highest stored id is already {max}", max = u64::MAX)]
    IdExhausted(RecordKind),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::RecordNotFound { .. } => ErrorCode::RecordNotFound,
            Self::RequiredField(_) => ErrorCode::RequiredField,
            Self::KindMismatch { .. } => ErrorCode::KindMismatch,
            Self::CorruptData { .. } | Self::IdExhausted(_) => ErrorCode::CorruptData,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::RecordNotFound { kind, .. } => {
                let cmd = match kind {
                    RecordKind::Clinical => "hh list --kind clinical",
                    RecordKind::Wellness => "hh list --kind wellness",
                };
                Some(format!("Use `{cmd}` to see existing ids."))
            }

            Self::RequiredField(field) => Some(format!("Provide a non-empty {field}.")),

            Self::CorruptData { path, .. } => Some(format!(
                "Fix or move {} aside; a missing file loads as an empty collection.",
                path.display()
            )),

            Self::IdExhausted(_) => {
                Some("Renumber the records in the data file; ids need not be contiguous.".to_string())
            }

            Self::Config(_) => Some(
                "Pass --data-dir <PATH> or set HH_DATA_DIR to choose a data directory.".to_string(),
            ),

            Self::InvalidArgument(msg) => {
                if msg.contains("severity") {
                    Some("Valid severities: Mild, Moderate, Critical".to_string())
                } else if msg.contains("frequency") {
                    Some("Valid frequencies: Daily, Weekly, Routine, Sometimes".to_string())
                } else if msg.contains("category") {
                    Some(
                        "Valid categories: Exercise, Nutrition, Sleep, Self-Care, \
                         Mental Wellness, Hygiene"
                            .to_string(),
                    )
                } else if msg.contains("kind") {
                    Some("Valid kinds: clinical, wellness".to_string())
                } else {
                    None
                }
            }

            Self::KindMismatch { .. } | Self::Io(_) | Self::Json(_) | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
