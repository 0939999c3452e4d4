//! churn-monitor CLI
//!
//! Post-deployment monitoring for a churn model.
//!
//! # Usage
//!
//! ```bash
//! # Compare logged prediction inputs against the training data
//! churn-monitor drift
//!
//! # Lower the sample guardrail and fail the job on alert
//! churn-monitor drift --min-samples 50 --fail-on-alert
//!
//! # Accuracy over labeled predictions
//! churn-monitor accuracy --window 100
//!
//! # Feature types inferred from the reference data
//! churn-monitor schema --format json
//! ```

use churn_monitor::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
