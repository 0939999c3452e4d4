//! Monitoring runs
//!
//! Each run is sequential: load the inputs, compute, write one JSON report.
//!
//! - `sources`: reference dataset and current distribution loading
//! - `driver`: drift and accuracy runs
//! - `persist`: atomic report writes

mod driver;
mod persist;
mod sources;

pub use driver::{run_accuracy_check, run_drift_check, run_drift_check_with};
pub use persist::write_report_json;
pub use sources::{load_current, load_reference, ReferenceData};
