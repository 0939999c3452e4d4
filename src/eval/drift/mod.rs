//! Drift Detection Module
//!
//! Compares the feature distribution of live prediction requests against the
//! reference (training) population with the Population Stability Index and signals
//! when the process drifts out of control.
//!
//! - `psi`: numeric (reference-quantile bins) and categorical PSI
//! - `features`: shared features split by reference type
//! - `checker`: per-feature scores, statuses and the overall verdict
//! - `report`: the persisted drift report

mod checker;
mod config;
mod features;
mod psi;
mod report;
mod types;


// Re-export all public types
pub use checker::{DriftCallback, DriftChecker};
pub use config::DriftConfig;
pub use features::classify_features;
pub use report::{DriftOutcome, DriftReport, FeatureDrift, InsufficientData};
pub use types::{FeaturePsi, FeatureSets, PsiStatus, PsiThresholds, ReportStatus, StatusCounts};

// Re-export PSI functions for testing/advanced use
pub use psi::{
    bin_edges, categorical_column_psi, categorical_psi, equal_width_edges, floored_proportions,
    histogram, numeric_column_psi, numeric_psi, psi_from_proportions, quantile_cut_points,
    quantile_sorted, BinEdges, BinStrategy, PROPORTION_FLOOR,
};
