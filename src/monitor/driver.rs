//! Drift and accuracy runs.

use crate::config::MonitorConfig;
use crate::data::PredictionLog;
use crate::error::Result;
use crate::eval::accuracy::{AccuracyReport, AccuracyTracker};
use crate::eval::drift::{DriftChecker, DriftReport};

use super::persist::write_report_json;
use super::sources::{load_current, load_reference};

/// Run a drift check with the default checker and persist the report.
///
/// An alerting report is logged at `warn` with the alerting features.
pub fn run_drift_check(config: &MonitorConfig) -> Result<DriftReport> {
    let mut checker = DriftChecker::new(config.drift.clone());
    checker.on_alert(|report| {
        tracing::warn!(alerts = ?report.alerts(), "feature drift alert");
    });
    run_drift_check_with(&checker, config)
}

/// Run a drift check with `checker` (and its alert callbacks) and persist the report.
pub fn run_drift_check_with(
    checker: &DriftChecker,
    config: &MonitorConfig,
) -> Result<DriftReport> {
    tracing::info!(
        reference = %config.reference_data_path.display(),
        logs = %config.prediction_log_path.display(),
        "starting drift check"
    );
    let reference = load_reference(&config.reference_data_path, &config.target_column)?;
    let current = load_current(&config.prediction_log_path, &config.input_column)?;

    let report = checker
        .check_and_trigger(&reference.schema, &reference.table, &current)
        .with_sources(&config.reference_data_path, &config.prediction_log_path);

    write_report_json(&config.drift_report_path(), &report)?;
    Ok(report)
}

/// Compute accuracy over the prediction log and persist the report.
pub fn run_accuracy_check(config: &MonitorConfig) -> Result<AccuracyReport> {
    tracing::info!(logs = %config.prediction_log_path.display(), "starting accuracy check");
    let log = PredictionLog::read(&config.prediction_log_path)?;
    let report = AccuracyTracker::new(config.accuracy.clone()).evaluate(&log)?;
    write_report_json(&config.accuracy_report_path(), &report)?;
    Ok(report)
}
