//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::MonitorConfig;

/// Churn model monitoring: feature drift and live accuracy
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "churn-monitor")]
#[command(version)]
#[command(about = "Detect feature drift (PSI) and track accuracy of a deployed churn model")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Compare logged prediction inputs against the reference data (PSI)
    Drift(DriftArgs),

    /// Compute accuracy over labeled prediction logs
    Accuracy(AccuracyArgs),

    /// Show the feature types inferred from the reference data
    Schema(SchemaArgs),
}

/// Arguments for the drift command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct DriftArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override reference dataset (CSV)
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// Override prediction log (CSV)
    #[arg(short, long)]
    pub logs: Option<PathBuf>,

    /// Override report directory
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Override minimum number of current samples
    #[arg(long)]
    pub min_samples: Option<usize>,

    /// Override number of numeric bins
    #[arg(long)]
    pub bins: Option<usize>,

    /// Override the PSI below which a feature is ok
    #[arg(long)]
    pub psi_ok: Option<f64>,

    /// Override the PSI at which a feature alerts
    #[arg(long)]
    pub psi_warning: Option<f64>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with failure when the overall status is alert
    #[arg(long)]
    pub fail_on_alert: bool,
}

/// Arguments for the accuracy command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct AccuracyArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override prediction log (CSV)
    #[arg(short, long)]
    pub logs: Option<PathBuf>,

    /// Override accuracy report path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override rolling window size
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the schema command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SchemaArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override reference dataset (CSV)
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply drift command-line overrides to a MonitorConfig
pub fn apply_drift_overrides(config: &mut MonitorConfig, args: &DriftArgs) {
    if let Some(reference) = &args.reference {
        config.reference_data_path = reference.clone();
    }
    if let Some(logs) = &args.logs {
        config.prediction_log_path = logs.clone();
    }
    if let Some(out_dir) = &args.out_dir {
        config.out_dir = out_dir.clone();
    }
    if let Some(min_samples) = args.min_samples {
        config.drift.min_current_samples = min_samples;
    }
    if let Some(bins) = args.bins {
        config.drift.numeric_bins = bins;
    }
    if let Some(ok) = args.psi_ok {
        config.drift.thresholds.ok = ok;
    }
    if let Some(warning) = args.psi_warning {
        config.drift.thresholds.warning = warning;
    }
}

/// Apply accuracy command-line overrides to a MonitorConfig
pub fn apply_accuracy_overrides(config: &mut MonitorConfig, args: &AccuracyArgs) {
    if let Some(logs) = &args.logs {
        config.prediction_log_path = logs.clone();
    }
    if let Some(output) = &args.output {
        config.accuracy_report_path = Some(output.clone());
    }
    if let Some(window) = args.window {
        config.accuracy.rolling_window = window;
    }
}

/// Apply schema command-line overrides to a MonitorConfig
pub fn apply_schema_overrides(config: &mut MonitorConfig, args: &SchemaArgs) {
    if let Some(reference) = &args.reference {
        config.reference_data_path = reference.clone();
    }
}
