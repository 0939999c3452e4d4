//! Drift checker implementation.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::data::{FeatureType, Schema, Table, Value};

use super::config::DriftConfig;
use super::features::classify_features;
use super::psi::{categorical_column_psi, numeric_column_psi};
use super::report::{DriftOutcome, DriftReport, FeatureDrift, InsufficientData};
use super::types::{FeaturePsi, PsiStatus, ReportStatus, StatusCounts};

/// Callback type for drift events (Andon Cord)
pub type DriftCallback = Box<dyn Fn(&DriftReport) + Send + Sync>;

/// Compares a current distribution against a reference distribution
pub struct DriftChecker {
    config: DriftConfig,
    callbacks: Vec<DriftCallback>,
}

impl DriftChecker {
    /// Create a checker
    pub fn new(config: DriftConfig) -> Self {
        Self { config, callbacks: Vec::new() }
    }

    /// Configuration in use
    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Register callback for alerting reports (Andon Cord)
    ///
    /// Callbacks are invoked by `check_and_trigger` when the overall status is `alert`.
    pub fn on_alert<F>(&mut self, callback: F)
    where
        F: Fn(&DriftReport) + Send + Sync + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Check for drift and trigger callbacks if the report is alerting
    pub fn check_and_trigger(
        &self,
        schema: &Schema,
        reference: &Table,
        current: &Table,
    ) -> DriftReport {
        let report = self.check(schema, reference, current);
        if report.status == ReportStatus::Alert {
            for callback in &self.callbacks {
                callback(&report);
            }
        }
        report
    }

    /// Compare `current` against `reference`, typing features with `schema`.
    ///
    /// When `current` has fewer rows than `min_current_samples` nothing is compared and
    /// the report status is `insufficient_data`.
    pub fn check(&self, schema: &Schema, reference: &Table, current: &Table) -> DriftReport {
        let n_reference_rows = reference.row_count();
        let n_current_rows = current.row_count();

        if n_current_rows < self.config.min_current_samples {
            tracing::info!(
                n_current_rows,
                min_current_samples = self.config.min_current_samples,
                "not enough production data for drift detection"
            );
            return DriftReport {
                status: ReportStatus::InsufficientData,
                generated_at: Utc::now(),
                reference_data_path: None,
                prediction_log_path: None,
                n_reference_rows,
                n_current_rows,
                outcome: DriftOutcome::InsufficientData(InsufficientData::new(
                    self.config.min_current_samples,
                )),
            };
        }

        let sets = classify_features(schema, reference, current);
        let mut feature_psi = BTreeMap::new();
        let mut summary = StatusCounts::default();
        let mut alerts = Vec::new();

        let checks = sets
            .numeric
            .iter()
            .map(|name| (name, FeatureType::Numeric))
            .chain(sets.categorical.iter().map(|name| (name, FeatureType::Categorical)));

        for (name, feature_type) in checks {
            let (Some(ref_values), Some(cur_values)) =
                (reference.column(name), current.column(name))
            else {
                continue;
            };
            let psi = self.feature_psi(feature_type, ref_values, cur_values);
            let status = self.config.thresholds.status(psi);
            tracing::debug!(feature = %name, %feature_type, ?psi, %status, "feature PSI");

            summary.record(status);
            if status == PsiStatus::Alert {
                alerts.push(name.clone());
            }
            feature_psi.insert(name.clone(), FeaturePsi { psi, feature_type, status });
        }

        let status = ReportStatus::from_counts(&summary);
        tracing::info!(
            %status,
            ok = summary.ok,
            warning = summary.warning,
            alert = summary.alert,
            unknown = summary.unknown,
            "drift check complete"
        );

        DriftReport {
            status,
            generated_at: Utc::now(),
            reference_data_path: None,
            prediction_log_path: None,
            n_reference_rows,
            n_current_rows,
            outcome: DriftOutcome::Evaluated(FeatureDrift {
                numeric_features_checked: sets.numeric,
                categorical_features_checked: sets.categorical,
                psi_thresholds: self.config.thresholds,
                feature_psi,
                summary,
                alerts,
            }),
        }
    }

    fn feature_psi(
        &self,
        feature_type: FeatureType,
        reference: &[Value],
        current: &[Value],
    ) -> Option<f64> {
        match feature_type {
            FeatureType::Numeric => {
                numeric_column_psi(reference, current, self.config.numeric_bins)
            }
            FeatureType::Categorical => Some(categorical_column_psi(reference, current)),
        }
    }
}

impl Default for DriftChecker {
    fn default() -> Self {
        Self::new(DriftConfig::default())
    }
}
