//! churn-monitor: post-deployment monitoring for churn prediction models
//!
//! Compares the feature distribution seen in production against the reference
//! (training) population using the Population Stability Index, and tracks
//! prediction accuracy once delayed labels arrive.
//!
//! ## Architecture
//!
//! - `data`: tabular values, CSV loading, schema inference, prediction-log decoding
//! - `eval::drift`: PSI comparators, feature classification, drift reports
//! - `eval::accuracy`: overall / rolling / daily accuracy over labeled logs
//! - `monitor`: driver that loads inputs, runs checks and persists reports
//! - `config`: layered configuration and CLI argument types
//! - `cli`: command dispatch
//!
//! ## Example
//!
//! ```
//! use churn_monitor::data::{Table, Value};
//! use churn_monitor::eval::drift::{DriftChecker, DriftConfig, ReportStatus};
//! use churn_monitor::data::Schema;
//!
//! let rows: Vec<Vec<(String, Value)>> = (0..200)
//!     .map(|i| vec![("tenure".to_string(), Value::Number(f64::from(i % 72)))])
//!     .collect();
//! let reference = Table::from_rows(rows.clone());
//! let current = Table::from_rows(rows);
//! let schema = Schema::infer(&reference);
//!
//! let report = DriftChecker::new(DriftConfig::default()).check(&schema, &reference, &current);
//! assert_eq!(report.status, ReportStatus::Ok);
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod monitor;

pub use error::{MonitorError, Result};
