//! Type definitions for drift detection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::FeatureType;

/// PSI boundaries between `ok`, `warning` and `alert`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsiThresholds {
    /// Scores below this are `ok`
    pub ok: f64,
    /// Scores below this (and at least `ok`) are `warning`; the rest are `alert`
    pub warning: f64,
}

impl Default for PsiThresholds {
    fn default() -> Self {
        Self { ok: 0.1, warning: 0.2 }
    }
}

impl PsiThresholds {
    /// Map a PSI score to a status; `None` (undefined score) is `unknown`.
    pub fn status(&self, psi: Option<f64>) -> PsiStatus {
        match psi {
            None => PsiStatus::Unknown,
            Some(v) if v.is_nan() => PsiStatus::Unknown,
            Some(v) if v < self.ok => PsiStatus::Ok,
            Some(v) if v < self.warning => PsiStatus::Warning,
            Some(_) => PsiStatus::Alert,
        }
    }
}

/// Drift status of one feature
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PsiStatus {
    /// No meaningful shift
    Ok,
    /// Moderate shift, keep an eye on it
    Warning,
    /// Significant shift
    Alert,
    /// PSI could not be computed
    Unknown,
}

impl PsiStatus {
    /// Lowercase name as it appears in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            PsiStatus::Ok => "ok",
            PsiStatus::Warning => "warning",
            PsiStatus::Alert => "alert",
            PsiStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PsiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall status of a drift report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Every feature is `ok` or `unknown`
    Ok,
    /// At least one `warning`, no `alert`
    Warning,
    /// At least one `alert`
    Alert,
    /// Too few production samples; nothing was compared
    InsufficientData,
}

impl ReportStatus {
    /// Worst status wins: alert, then warning, else ok.
    pub fn from_counts(counts: &StatusCounts) -> Self {
        if counts.alert > 0 {
            ReportStatus::Alert
        } else if counts.warning > 0 {
            ReportStatus::Warning
        } else {
            ReportStatus::Ok
        }
    }

    /// Name as it appears in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Ok => "ok",
            ReportStatus::Warning => "warning",
            ReportStatus::Alert => "alert",
            ReportStatus::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-feature drift entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeaturePsi {
    /// PSI score; `None` when it could not be computed
    pub psi: Option<f64>,
    /// How the feature was compared
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    /// Status derived from the score
    pub status: PsiStatus,
}

/// Number of features per status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub ok: usize,
    pub warning: usize,
    pub alert: usize,
    pub unknown: usize,
}

impl StatusCounts {
    /// Count one feature
    pub fn record(&mut self, status: PsiStatus) {
        match status {
            PsiStatus::Ok => self.ok += 1,
            PsiStatus::Warning => self.warning += 1,
            PsiStatus::Alert => self.alert += 1,
            PsiStatus::Unknown => self.unknown += 1,
        }
    }

    /// Total number of features counted
    pub fn total(&self) -> usize {
        self.ok + self.warning + self.alert + self.unknown
    }
}

/// Features present in both datasets, split by reference type
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSets {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

impl FeatureSets {
    /// Total number of features
    pub fn len(&self) -> usize {
        self.numeric.len() + self.categorical.len()
    }

    /// Whether no feature is shared
    pub fn is_empty(&self) -> bool {
        self.numeric.is_empty() && self.categorical.is_empty()
    }
}
