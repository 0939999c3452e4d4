//! Accuracy tracking over labeled prediction logs
//!
//! Ground truth arrives after the prediction (through a feedback endpoint), so only
//! the logged rows that carry a `true_label` contribute. The tracker reports overall
//! accuracy, a rolling window over the most recent labeled rows, and a daily trend.

mod config;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use config::AccuracyConfig;
pub use tracker::{parse_timestamp, AccuracyTracker, REQUIRED_COLUMNS};
pub use types::{AccuracyReport, DailyAccuracy};
