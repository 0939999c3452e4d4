//! Accuracy report types.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Accuracy of the labeled predictions made on one calendar date
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyAccuracy {
    pub date: NaiveDate,
    pub accuracy: f64,
    pub samples: usize,
}

/// Result of one accuracy check
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// When the report was built
    pub generated_at: DateTime<Utc>,
    /// Prediction log the run read
    pub log_path: PathBuf,
    /// Rows in the log
    pub total_predictions: usize,
    /// Rows with a ground-truth label
    pub labeled_samples: usize,
    /// Labeled rows whose correctness could not be determined
    pub skipped_samples: usize,
    pub rolling_window: usize,
    /// Mean correctness over every scored row; `null` without labels
    pub overall_accuracy: Option<f64>,
    /// Mean correctness over the scored rows among the last `rolling_window` labeled rows
    pub rolling_accuracy: Option<f64>,
    /// Sorted by date; rows with unparseable timestamps are left out
    pub daily_accuracy: Vec<DailyAccuracy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl AccuracyReport {
    /// Rows that contributed to the accuracies
    pub fn scored_samples(&self) -> usize {
        self.labeled_samples - self.skipped_samples
    }

    /// Whether any accuracy could be computed
    pub fn has_labels(&self) -> bool {
        self.overall_accuracy.is_some()
    }
}
