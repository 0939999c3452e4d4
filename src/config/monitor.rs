//! Monitoring run configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, Result};
use crate::eval::accuracy::AccuracyConfig;
use crate::eval::drift::DriftConfig;

/// Environment variables read by [`MonitorConfig::apply_env`]
pub const ENV_VARS: [&str; 9] = [
    "REFERENCE_DATA_PATH",
    "PREDICTION_LOG_PATH",
    "MONITORING_OUT_DIR",
    "ACCURACY_REPORT_PATH",
    "MIN_CURRENT_SAMPLES",
    "ACCURACY_ROLLING_WINDOW",
    "PSI_OK_THRESHOLD",
    "PSI_WARNING_THRESHOLD",
    "PSI_NUMERIC_BINS",
];

/// Lookup against the process environment
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Everything a monitoring run needs to know
///
/// # Example
///
/// ```yaml
/// reference_data_path: data/processed/final.csv
/// prediction_log_path: prediction_logs.csv
/// out_dir: monitoring
/// drift:
///   min_current_samples: 100
///   numeric_bins: 10
///   thresholds:
///     ok: 0.1
///     warning: 0.2
/// accuracy:
///   rolling_window: 50
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Training table the live traffic is compared against
    pub reference_data_path: PathBuf,
    /// CSV log appended by the serving endpoint
    pub prediction_log_path: PathBuf,
    /// Directory receiving the reports
    pub out_dir: PathBuf,
    /// Accuracy report location; `<out_dir>/accuracy_report.json` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_report_path: Option<PathBuf>,
    /// Label column removed from the reference before comparison
    pub target_column: String,
    /// Log column holding each request's JSON payload
    pub input_column: String,
    pub drift: DriftConfig,
    pub accuracy: AccuracyConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            reference_data_path: PathBuf::from("data/processed/final.csv"),
            prediction_log_path: PathBuf::from("prediction_logs.csv"),
            out_dir: PathBuf::from("monitoring"),
            accuracy_report_path: None,
            target_column: "churn".to_string(),
            input_column: "input_json".to_string(),
            drift: DriftConfig::default(),
            accuracy: AccuracyConfig::default(),
        }
    }
}

impl MonitorConfig {
    /// Parse a YAML configuration file; omitted keys keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MonitorError::FileNotFound {
                what: "Configuration file",
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)
            .map_err(|e| MonitorError::io(format!("reading {}", path.display()), e))?;
        Self::from_yaml_str(path, &content)
    }

    /// Parse YAML text; `path` labels diagnostics.
    pub fn from_yaml_str(path: &Path, content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| MonitorError::ConfigParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Defaults, then the optional YAML file, then the environment seen through `lookup`.
    pub fn resolve<F>(config_file: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_file {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Override settings from environment variables (see [`ENV_VARS`]).
    ///
    /// Unset and blank variables are ignored; values that do not parse are errors.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("REFERENCE_DATA_PATH") {
            self.reference_data_path = PathBuf::from(v);
        }
        if let Some(v) = get("PREDICTION_LOG_PATH") {
            self.prediction_log_path = PathBuf::from(v);
        }
        if let Some(v) = get("MONITORING_OUT_DIR") {
            self.out_dir = PathBuf::from(v);
        }
        if let Some(v) = get("ACCURACY_REPORT_PATH") {
            self.accuracy_report_path = Some(PathBuf::from(v));
        }
        if let Some(v) = get("MIN_CURRENT_SAMPLES") {
            self.drift.min_current_samples = parse_env("MIN_CURRENT_SAMPLES", &v)?;
        }
        if let Some(v) = get("ACCURACY_ROLLING_WINDOW") {
            self.accuracy.rolling_window = parse_env("ACCURACY_ROLLING_WINDOW", &v)?;
        }
        if let Some(v) = get("PSI_OK_THRESHOLD") {
            self.drift.thresholds.ok = parse_env("PSI_OK_THRESHOLD", &v)?;
        }
        if let Some(v) = get("PSI_WARNING_THRESHOLD") {
            self.drift.thresholds.warning = parse_env("PSI_WARNING_THRESHOLD", &v)?;
        }
        if let Some(v) = get("PSI_NUMERIC_BINS") {
            self.drift.numeric_bins = parse_env("PSI_NUMERIC_BINS", &v)?;
        }
        Ok(())
    }

    /// Check every section
    pub fn validate(&self) -> Result<()> {
        if self.target_column.trim().is_empty() {
            return Err(MonitorError::config_value(
                "target_column",
                "must not be empty",
                "Use the label column of the training table, e.g. churn",
            ));
        }
        if self.input_column.trim().is_empty() {
            return Err(MonitorError::config_value(
                "input_column",
                "must not be empty",
                "Use the log column holding the request JSON, e.g. input_json",
            ));
        }
        self.drift.validate()?;
        self.accuracy.validate()
    }

    /// Where the drift report is written
    pub fn drift_report_path(&self) -> PathBuf {
        self.out_dir.join("drift_report.json")
    }

    /// Where the accuracy report is written
    pub fn accuracy_report_path(&self) -> PathBuf {
        self.accuracy_report_path
            .clone()
            .unwrap_or_else(|| self.out_dir.join("accuracy_report.json"))
    }
}

fn parse_env<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| {
        MonitorError::config_value(
            name,
            format!("'{raw}' does not parse: {e}"),
            format!("Unset {name} or give it a valid value"),
        )
    })
}
