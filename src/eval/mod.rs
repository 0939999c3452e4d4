//! Model monitoring evaluations
//!
//! ## Architecture
//!
//! - `drift`: Population Stability Index drift detection against the reference data
//! - `accuracy`: accuracy tracking over labeled prediction logs
//!
//! ## Example
//!
//! ```ignore
//! use churn_monitor::eval::drift::{DriftChecker, DriftConfig};
//!
//! let checker = DriftChecker::new(DriftConfig::default());
//! let report = checker.check(&schema, &reference, &current);
//! println!("drift status: {}", report.status);
//! ```

pub mod accuracy;
pub mod drift;

pub use accuracy::{AccuracyConfig, AccuracyReport, AccuracyTracker};
pub use drift::{DriftChecker, DriftConfig, DriftReport, ReportStatus};
