//! Error types and exit codes for arbor
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args/values)
//! - 3: Data error (missing document, unknown note, undecodable file)
//!
//! The parse/reconcile/recall algorithms never fail; these errors belong to
//! the lifecycle, persistence, configuration and CLI layers around them.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing document, unknown note (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during arbor operations
#[derive(Error, Debug)]
pub enum ArborError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    #[error("invalid coordinate: {0:?} (expected dot-separated positive integers)")]
    InvalidCoordinate(String),

    // Data errors (exit code 3)
    #[error("document not found: {path:?}")]
    DocumentNotFound { path: PathBuf },

    #[error("note not found: {coordinate}")]
    NoteNotFound { coordinate: String },

    #[error("invalid document {path:?}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl ArborError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ArborError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ArborError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        ArborError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ArborError::UnknownFormat(_)
            | ArborError::UsageError(_)
            | ArborError::InvalidValue { .. }
            | ArborError::Unsupported { .. }
            | ArborError::InvalidCoordinate(_) => ExitCode::Usage,

            ArborError::DocumentNotFound { .. }
            | ArborError::NoteNotFound { .. }
            | ArborError::InvalidDocument { .. }
            | ArborError::InvalidConfig { .. } => ExitCode::Data,

            ArborError::Io(_)
            | ArborError::Json(_)
            | ArborError::Toml(_)
            | ArborError::FailedOperationWithTarget { .. }
            | ArborError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ArborError::UnknownFormat(_) => "unknown_format",
            ArborError::UsageError(_) => "usage_error",
            ArborError::InvalidValue { .. } => "invalid_value",
            ArborError::Unsupported { .. } => "unsupported",
            ArborError::InvalidCoordinate(_) => "invalid_coordinate",
            ArborError::DocumentNotFound { .. } => "document_not_found",
            ArborError::NoteNotFound { .. } => "note_not_found",
            ArborError::InvalidDocument { .. } => "invalid_document",
            ArborError::InvalidConfig { .. } => "invalid_config",
            ArborError::Io(_) => "io_error",
            ArborError::Json(_) => "json_error",
            ArborError::Toml(_) => "toml_error",
            ArborError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            ArborError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for arbor operations
pub type Result<T> = std::result::Result<T, ArborError>;
