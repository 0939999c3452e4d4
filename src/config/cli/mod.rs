//! CLI argument parsing and overrides
//!
//! # Usage
//!
//! ```bash
//! churn-monitor drift
//! churn-monitor drift --config monitor.yaml --min-samples 50 --fail-on-alert
//! churn-monitor accuracy --logs prediction_logs.csv --window 100
//! churn-monitor schema --reference data/processed/final.csv --format json
//! ```

mod core;
mod types;

// Re-export all public types
pub use core::{
    apply_accuracy_overrides, apply_drift_overrides, apply_schema_overrides, parse_args,
    AccuracyArgs, Cli, Command, DriftArgs, SchemaArgs,
};
pub use types::OutputFormat;
