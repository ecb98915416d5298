//! Error types and exit codes for rulekit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, serialization)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing workspace, unknown rule, malformed import)

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
    /// Data error - missing workspace, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during rulekit operations
#[derive(Error, Debug)]
pub enum RulekitError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("no project folder open: {path:?} is not a directory")]
    MissingWorkspace { path: PathBuf },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("malformed import {path:?}: {reason}")]
    MalformedImport { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RulekitError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RulekitError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RulekitError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RulekitError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an import that could not be parsed
    pub fn malformed_import(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RulekitError::MalformedImport {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RulekitError::UnknownFormat(_)
            | RulekitError::UsageError(_)
            | RulekitError::InvalidValue { .. } => ExitCode::Usage,

            RulekitError::MissingWorkspace { .. }
            | RulekitError::NotFound { .. }
            | RulekitError::MalformedImport { .. } => ExitCode::Data,

            RulekitError::Io(_)
            | RulekitError::Json(_)
            | RulekitError::Toml(_)
            | RulekitError::TomlSer(_)
            | RulekitError::FailedOperationWithTarget { .. }
            | RulekitError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RulekitError::UnknownFormat(_) => "unknown_format",
            RulekitError::UsageError(_) => "usage_error",
            RulekitError::InvalidValue { .. } => "invalid_value",
            RulekitError::MissingWorkspace { .. } => "missing_workspace",
            RulekitError::NotFound { .. } => "not_found",
            RulekitError::MalformedImport { .. } => "malformed_import",
            RulekitError::Io(_) => "io_error",
            RulekitError::Json(_) => "json_error",
            RulekitError::Toml(_) | RulekitError::TomlSer(_) => "toml_error",
            RulekitError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RulekitError::Other(_) => "other",
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

/// Result type alias for rulekit operations
pub type Result<T> = std::result::Result<T, RulekitError>;
