//! Accuracy command implementation

use std::io::Write;

use crate::cli::logging::log_to;
use crate::cli::LogLevel;
use crate::config::cli::{apply_accuracy_overrides, AccuracyArgs, OutputFormat};
use crate::error::Result;
use crate::eval::accuracy::AccuracyReport;
use crate::monitor::run_accuracy_check;

use super::{base_config, print_structured};

pub fn run_accuracy<W: Write>(args: AccuracyArgs, level: LogLevel, out: &mut W) -> Result<()> {
    let mut config = base_config(args.config.as_deref())?;
    apply_accuracy_overrides(&mut config, &args);
    config.validate()?;

    let report = run_accuracy_check(&config)?;

    let saved = config.accuracy_report_path();
    match args.format {
        OutputFormat::Text => {
            print_summary(out, &report, level);
            let line = format!("Saved accuracy report: {}", saved.display());
            log_to(out, level, LogLevel::Normal, &line);
        }
        format => {
            print_structured(out, format, &report)?;
            tracing::info!(path = %saved.display(), "saved accuracy report");
        }
    }
    Ok(())
}

fn print_summary<W: Write>(out: &mut W, report: &AccuracyReport, level: LogLevel) {
    let pct =
        |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}%", v * 100.0));

    log_to(out, level, LogLevel::Normal, "Accuracy Results:");
    log_to(
        out,
        level,
        LogLevel::Normal,
        &format!(
            "  Predictions: {} total, {} labeled",
            report.total_predictions, report.labeled_samples
        ),
    );
    if report.skipped_samples > 0 {
        log_to(
            out,
            level,
            LogLevel::Normal,
            &format!(
                "  Skipped: {} labeled rows without usable correctness",
                report.skipped_samples
            ),
        );
    }
    let overall = format!("  Overall accuracy: {}", pct(report.overall_accuracy));
    log_to(out, level, LogLevel::Normal, &overall);
    log_to(
        out,
        level,
        LogLevel::Normal,
        &format!(
            "  Rolling accuracy (last {}): {}",
            report.rolling_window,
            pct(report.rolling_accuracy)
        ),
    );
    for day in &report.daily_accuracy {
        log_to(
            out,
            level,
            LogLevel::Verbose,
            &format!(
                "    {}  {:>7.2}%  ({} samples)",
                day.date,
                day.accuracy * 100.0,
                day.samples
            ),
        );
    }
    if let Some(note) = &report.note {
        log_to(out, level, LogLevel::Normal, &format!("  Note: {note}"));
    }
}
