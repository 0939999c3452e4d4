//! Error types with actionable diagnostics.
//!
//! Every variant names the offending input and says what to do next.
//! Problems confined to a single record (an unparseable cell, a log row whose
//! payload is not a JSON object) are never errors; they are filtered out where
//! the data is read.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for monitoring operations.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Errors that abort a monitoring run.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// An input file does not exist.
    #[error("{what} not found: {path}\n  → Check the path or set it via --config, the environment or a CLI flag")]
    FileNotFound { what: &'static str, path: PathBuf },

    /// An input table lacks columns the run depends on.
    #[error("{path} is missing required column(s): {}\n  → {hint}", columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String>, hint: String },

    /// Two source columns collapse to the same normalized name.
    #[error("Duplicate column '{column}' in {path} after name normalization\n  → Rename one of the source columns")]
    DuplicateColumn { path: PathBuf, column: String },

    /// No prediction log record decoded to a JSON object.
    #[error("No valid JSON inputs found in {path}\n  → Send /predict requests so the log holds at least one object payload")]
    NoValidRecords { path: PathBuf },

    /// Malformed CSV input.
    #[error("Failed to read CSV {path}: {message}\n  → Check quoting and that every row has the header's column count")]
    Csv { path: PathBuf, message: String },

    /// Configuration file has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue { field: String, message: String, suggestion: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error while writing a report.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Drift check finished with alerting features and the caller asked to fail on it.
    #[error("Drift alert on {} feature(s): {}\n  → Inspect the drift report and consider retraining", features.len(), features.join(", "))]
    DriftAlert { features: Vec<String> },
}

impl MonitorError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create a configuration value error.
    pub fn config_value(
        field: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::ConfigValue {
            field: field.into(),
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Check if this error is user-recoverable (bad input or configuration).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::MissingColumns { .. }
                | Self::DuplicateColumn { .. }
                | Self::NoValidRecords { .. }
                | Self::Csv { .. }
                | Self::ConfigParsing { .. }
                | Self::ConfigValue { .. }
                | Self::DriftAlert { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "E001",
            Self::MissingColumns { .. } => "E010",
            Self::DuplicateColumn { .. } => "E011",
            Self::NoValidRecords { .. } => "E012",
            Self::Csv { .. } => "E013",
            Self::ConfigParsing { .. } => "E020",
            Self::ConfigValue { .. } => "E021",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
            Self::DriftAlert { .. } => "E060",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_variants() -> Vec<MonitorError> {
        vec![
            MonitorError::FileNotFound { what: "Reference dataset", path: "".into() },
            MonitorError::MissingColumns { path: "".into(), columns: vec![], hint: "".into() },
            MonitorError::DuplicateColumn { path: "".into(), column: "".into() },
            MonitorError::NoValidRecords { path: "".into() },
            MonitorError::Csv { path: "".into(), message: "".into() },
            MonitorError::ConfigParsing { path: "".into(), message: "".into() },
            MonitorError::config_value("", "", ""),
            MonitorError::io("", std::io::Error::other("boom")),
            MonitorError::Serialization { message: "".into() },
            MonitorError::DriftAlert { features: vec![] },
        ]
    }

    #[test]
    fn test_error_codes_are_unique() {
        let errors = all_variants();
        let codes: HashSet<_> = errors.iter().map(MonitorError::code).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_missing_columns_lists_names() {
        let err = MonitorError::MissingColumns {
            path: "prediction_logs.csv".into(),
            columns: vec!["input_json".into(), "timestamp".into()],
            hint: "log the request payload".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("prediction_logs.csv"));
        assert!(msg.contains("input_json, timestamp"));
        assert!(msg.contains("log the request payload"));
    }

    #[test]
    fn test_file_not_found_is_user_error() {
        let err = MonitorError::FileNotFound { what: "Prediction log", path: "x.csv".into() };
        assert!(err.is_user_error());
        assert!(err.to_string().starts_with("Prediction log not found: x.csv"));
    }

    #[test]
    fn test_io_is_not_user_error() {
        let err = MonitorError::io("writing report", std::io::Error::other("disk full"));
        assert!(!err.is_user_error());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_drift_alert_message() {
        let err = MonitorError::DriftAlert { features: vec!["tenure".into(), "contract".into()] };
        let msg = err.to_string();
        assert!(msg.contains("2 feature(s)"));
        assert!(msg.contains("tenure, contract"));
    }
}
