//! Error types and exit codes for trackscope
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing files, bad dataset schema, unknown track, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the trackscope runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing dataset/model, bad schema (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trackscope operations
#[derive(Error, Debug)]
pub enum TrackscopeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    #[error("model not found: {path:?}")]
    ModelNotFound { path: PathBuf },

    #[error("dataset {path:?} is missing identifying columns: {}", .missing.join(", "))]
    DatasetSchemaError { path: PathBuf, missing: Vec<String> },

    #[error("missing feature columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("invalid value {value:?} for column {column} at line {line}")]
    InvalidDatasetValue {
        line: u64,
        column: String,
        value: String,
    },

    #[error("cannot derive {column} for {label}: {reason}")]
    InvalidFeature {
        label: String,
        column: String,
        reason: String,
    },

    #[error("invalid model {path:?}: {reason}")]
    InvalidModel { path: PathBuf, reason: String },

    #[error("insufficient data: requested {requested} neighbors, {available} available")]
    InsufficientData { requested: usize, available: usize },

    #[error("track not found: {label}")]
    TrackNotFound { label: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl TrackscopeError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TrackscopeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a feature that cannot be computed for a track
    pub fn invalid_feature(label: &str, column: &str, reason: impl std::fmt::Display) -> Self {
        TrackscopeError::InvalidFeature {
            label: label.to_string(),
            column: column.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a model artifact that cannot be used
    pub fn invalid_model(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        TrackscopeError::InvalidModel {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a missing set of feature columns
    pub fn missing_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TrackscopeError::MissingColumns(columns.into_iter().map(Into::into).collect())
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        TrackscopeError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            TrackscopeError::UnknownFormat(_)
            | TrackscopeError::UsageError(_)
            | TrackscopeError::InvalidValue { .. } => ExitCode::Usage,

            // Data errors
            TrackscopeError::DatasetNotFound { .. }
            | TrackscopeError::ModelNotFound { .. }
            | TrackscopeError::DatasetSchemaError { .. }
            | TrackscopeError::MissingColumns(_)
            | TrackscopeError::InvalidDatasetValue { .. }
            | TrackscopeError::InvalidFeature { .. }
            | TrackscopeError::InvalidModel { .. }
            | TrackscopeError::InsufficientData { .. }
            | TrackscopeError::TrackNotFound { .. } => ExitCode::Data,

            // Generic failures
            TrackscopeError::Io(_)
            | TrackscopeError::Csv(_)
            | TrackscopeError::Json(_)
            | TrackscopeError::Toml(_)
            | TrackscopeError::FailedOperation { .. }
            | TrackscopeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TrackscopeError::UnknownFormat(_) => "unknown_format",
            TrackscopeError::UsageError(_) => "usage_error",
            TrackscopeError::InvalidValue { .. } => "invalid_value",
            TrackscopeError::DatasetNotFound { .. } => "dataset_not_found",
            TrackscopeError::ModelNotFound { .. } => "model_not_found",
            TrackscopeError::DatasetSchemaError { .. } => "dataset_schema_error",
            TrackscopeError::MissingColumns(_) => "missing_columns",
            TrackscopeError::InvalidDatasetValue { .. } => "invalid_dataset_value",
            TrackscopeError::InvalidFeature { .. } => "invalid_feature",
            TrackscopeError::InvalidModel { .. } => "invalid_model",
            TrackscopeError::InsufficientData { .. } => "insufficient_data",
            TrackscopeError::TrackNotFound { .. } => "track_not_found",
            TrackscopeError::Io(_) => "io_error",
            TrackscopeError::Csv(_) => "csv_error",
            TrackscopeError::Json(_) => "json_error",
            TrackscopeError::Toml(_) => "toml_error",
            TrackscopeError::FailedOperation { .. } => "failed_operation",
            TrackscopeError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for trackscope operations
pub type Result<T> = std::result::Result<T, TrackscopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_kind() {
        assert_eq!(
            TrackscopeError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            TrackscopeError::DatasetNotFound {
                path: PathBuf::from("songs.csv")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            TrackscopeError::InsufficientData {
                requested: 4,
                available: 1
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            TrackscopeError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_missing_columns_message_lists_names() {
        let err = TrackscopeError::missing_columns(["tempo", "energy"]);
        assert_eq!(err.to_string(), "missing feature columns: tempo, energy");
        assert_eq!(err.error_type(), "missing_columns");
    }

    #[test]
    fn test_to_json_envelope() {
        let err = TrackscopeError::TrackNotFound {
            label: "Song - Artist".into(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "track_not_found");
        assert_eq!(json["error"]["message"], "track not found: Song - Artist");
    }
}
