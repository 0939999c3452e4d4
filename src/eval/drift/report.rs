//! Drift report.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{FeaturePsi, PsiThresholds, ReportStatus, StatusCounts};

/// Result of one drift check. Built once, then persisted as is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    /// Overall status
    pub status: ReportStatus,
    /// When the report was built
    pub generated_at: DateTime<Utc>,
    /// Reference dataset the run read, when loaded from disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_data_path: Option<PathBuf>,
    /// Prediction log the run read, when loaded from disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_log_path: Option<PathBuf>,
    /// Rows in the reference distribution
    pub n_reference_rows: usize,
    /// Rows in the current distribution
    pub n_current_rows: usize,
    /// Either the per-feature comparison or the reason it was skipped
    #[serde(flatten)]
    pub outcome: DriftOutcome,
}

/// What a drift check produced
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DriftOutcome {
    /// Features were compared
    Evaluated(FeatureDrift),
    /// Not enough current rows to compare
    InsufficientData(InsufficientData),
}

/// Per-feature comparison results
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureDrift {
    pub numeric_features_checked: Vec<String>,
    pub categorical_features_checked: Vec<String>,
    pub psi_thresholds: PsiThresholds,
    pub feature_psi: BTreeMap<String, FeaturePsi>,
    pub summary: StatusCounts,
    /// Alerting features in the order they were checked
    pub alerts: Vec<String>,
}

/// Guidance emitted instead of PSI values when the current sample is too small
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsufficientData {
    pub min_current_samples: usize,
    pub message: String,
    pub next_step: String,
}

impl InsufficientData {
    pub(crate) fn new(min_current_samples: usize) -> Self {
        Self {
            min_current_samples,
            message: format!(
                "Need at least {min_current_samples} prediction samples to evaluate drift reliably."
            ),
            next_step: concat!(
                "Send more /predict requests (or run a small load test), ",
                "then re-run the drift check."
            )
            .to_string(),
        }
    }
}

impl DriftReport {
    /// Record where the inputs came from
    pub fn with_sources(mut self, reference: &Path, prediction_log: &Path) -> Self {
        self.reference_data_path = Some(reference.to_path_buf());
        self.prediction_log_path = Some(prediction_log.to_path_buf());
        self
    }

    /// Per-feature results, unless the check was skipped
    pub fn feature_drift(&self) -> Option<&FeatureDrift> {
        match &self.outcome {
            DriftOutcome::Evaluated(drift) => Some(drift),
            DriftOutcome::InsufficientData(_) => None,
        }
    }

    /// Whether the check was skipped for lack of data
    pub fn is_insufficient(&self) -> bool {
        self.status == ReportStatus::InsufficientData
    }

    /// Names of alerting features
    pub fn alerts(&self) -> &[String] {
        self.feature_drift().map_or(&[], |d| d.alerts.as_slice())
    }

    /// Per-feature entry
    pub fn feature(&self, name: &str) -> Option<&FeaturePsi> {
        self.feature_drift().and_then(|d| d.feature_psi.get(name))
    }
}
