//! Drift command implementation

use std::io::Write;

use crate::cli::logging::log_to;
use crate::cli::LogLevel;
use crate::config::cli::{apply_drift_overrides, DriftArgs, OutputFormat};
use crate::error::{MonitorError, Result};
use crate::eval::drift::{DriftOutcome, DriftReport, PsiStatus, ReportStatus};
use crate::monitor::run_drift_check;

use super::{base_config, print_structured};

pub fn run_drift<W: Write>(args: DriftArgs, level: LogLevel, out: &mut W) -> Result<()> {
    let mut config = base_config(args.config.as_deref())?;
    apply_drift_overrides(&mut config, &args);
    config.validate()?;

    let report = run_drift_check(&config)?;

    let saved = config.drift_report_path();
    match args.format {
        OutputFormat::Text => {
            print_summary(out, &report, level);
            let line = format!("Saved drift report: {}", saved.display());
            log_to(out, level, LogLevel::Normal, &line);
        }
        format => {
            print_structured(out, format, &report)?;
            tracing::info!(path = %saved.display(), "saved drift report");
        }
    }

    if args.fail_on_alert && report.status == ReportStatus::Alert {
        return Err(MonitorError::DriftAlert { features: report.alerts().to_vec() });
    }
    Ok(())
}

fn print_summary<W: Write>(out: &mut W, report: &DriftReport, level: LogLevel) {
    log_to(out, level, LogLevel::Normal, "Drift Check Results:");
    log_to(
        out,
        level,
        LogLevel::Normal,
        &format!(
            "  Rows: {} reference, {} current",
            report.n_reference_rows, report.n_current_rows
        ),
    );

    let Some(drift) = report.feature_drift() else {
        log_to(out, level, LogLevel::Normal, &format!("  Status: {}", report.status));
        if let DriftOutcome::InsufficientData(info) = &report.outcome {
            log_to(out, level, LogLevel::Normal, &format!("  {}", info.message));
            log_to(out, level, LogLevel::Normal, &format!("  Next step: {}", info.next_step));
        }
        return;
    };

    log_to(
        out,
        level,
        LogLevel::Normal,
        &format!(
            "  Features: {} numeric, {} categorical",
            drift.numeric_features_checked.len(),
            drift.categorical_features_checked.len()
        ),
    );
    for (name, feature) in &drift.feature_psi {
        let psi = feature.psi.map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"));
        let line = format!(
            "    {name:<24} {:<12} PSI {psi:>8}  {}",
            feature.feature_type.as_str(),
            feature.status
        );
        let required = if feature.status == PsiStatus::Ok {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        };
        log_to(out, level, required, &line);
    }
    log_to(
        out,
        level,
        LogLevel::Normal,
        &format!(
            "  Summary: {} ok, {} warning, {} alert, {} unknown",
            drift.summary.ok, drift.summary.warning, drift.summary.alert, drift.summary.unknown
        ),
    );
    if !drift.alerts.is_empty() {
        log_to(out, level, LogLevel::Normal, &format!("  Alerts: {}", drift.alerts.join(", ")));
    }
    log_to(out, level, LogLevel::Normal, &format!("  Status: {}", report.status));
}
