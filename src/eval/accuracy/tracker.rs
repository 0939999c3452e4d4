//! Accuracy tracker implementation.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::data::{PredictionLog, Value};
use crate::error::Result;

use super::config::AccuracyConfig;
use super::types::{AccuracyReport, DailyAccuracy};

/// Log columns accuracy tracking depends on
pub const REQUIRED_COLUMNS: [&str; 4] = ["timestamp", "prediction", "true_label", "is_correct"];

const NO_LABELS_NOTE: &str = concat!(
    "No ground truth labels yet. ",
    "Use POST /feedback to attach true labels, then re-run this check."
);

const NO_SCORES_NOTE: &str = concat!(
    "Labeled rows carry neither a usable is_correct flag ",
    "nor comparable prediction/true_label values."
);

/// Parse a logged timestamp: RFC 3339, or a naive ISO date-time (`T` or space separated).
///
/// Offset timestamps keep their own calendar date.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Last `capacity` labeled rows; `None` marks a row without usable correctness.
#[derive(Debug, Default)]
struct RollingWindow {
    capacity: usize,
    values: VecDeque<Option<bool>>,
}

impl RollingWindow {
    fn new(capacity: usize) -> Self {
        Self { capacity, values: VecDeque::with_capacity(capacity) }
    }

    fn push(&mut self, correct: Option<bool>) {
        if self.values.len() >= self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(correct);
    }

    /// Mean over the scored rows in the window
    fn mean(&self) -> Option<f64> {
        let (hits, scored) = self
            .values
            .iter()
            .flatten()
            .fold((0usize, 0usize), |(hits, scored), &hit| (hits + usize::from(hit), scored + 1));
        (scored > 0).then(|| hits as f64 / scored as f64)
    }
}

/// Computes accuracy metrics over a prediction log
#[derive(Debug, Clone, Default)]
pub struct AccuracyTracker {
    config: AccuracyConfig,
}

impl AccuracyTracker {
    /// Create a tracker
    pub fn new(config: AccuracyConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &AccuracyConfig {
        &self.config
    }

    /// Evaluate every labeled row of `log`, in log order.
    pub fn evaluate(&self, log: &PredictionLog) -> Result<AccuracyReport> {
        log.require_columns(
            &REQUIRED_COLUMNS,
            "Log true_label and is_correct alongside each prediction",
        )?;

        let rows = cells(log, "timestamp")
            .zip(cells(log, "prediction"))
            .zip(cells(log, "true_label"))
            .zip(cells(log, "is_correct"));

        let mut labeled = 0usize;
        let mut skipped = 0usize;
        let mut scored = 0usize;
        let mut correct = 0usize;
        let mut rolling = RollingWindow::new(self.config.rolling_window.max(1));
        let mut daily: BTreeMap<NaiveDate, (usize, usize)> = BTreeMap::new();

        for (line, (((timestamp, prediction), true_label), is_correct)) in rows.enumerate() {
            let label = Value::from_csv_cell(true_label);
            if label.is_missing() {
                continue;
            }
            labeled += 1;

            let hit = row_correctness(is_correct, prediction, &label);
            rolling.push(hit);
            let Some(hit) = hit else {
                skipped += 1;
                tracing::warn!(
                    record = line,
                    is_correct,
                    prediction,
                    true_label,
                    "skipping labeled row without usable correctness"
                );
                continue;
            };

            scored += 1;
            correct += usize::from(hit);

            match parse_timestamp(timestamp) {
                Some(ts) => {
                    let day = daily.entry(ts.date()).or_insert((0, 0));
                    day.0 += usize::from(hit);
                    day.1 += 1;
                }
                None => tracing::debug!(record = line, timestamp, "unparseable timestamp"),
            }
        }

        let overall_accuracy = (scored > 0).then(|| correct as f64 / scored as f64);
        let note = if labeled == 0 {
            Some(NO_LABELS_NOTE.to_string())
        } else if scored == 0 {
            Some(NO_SCORES_NOTE.to_string())
        } else {
            None
        };

        let report = AccuracyReport {
            generated_at: Utc::now(),
            log_path: log.path().to_path_buf(),
            total_predictions: log.len(),
            labeled_samples: labeled,
            skipped_samples: skipped,
            rolling_window: self.config.rolling_window,
            overall_accuracy,
            rolling_accuracy: rolling.mean(),
            daily_accuracy: daily
                .into_iter()
                .map(|(date, (hits, samples))| DailyAccuracy {
                    date,
                    accuracy: hits as f64 / samples as f64,
                    samples,
                })
                .collect(),
            note,
        };

        tracing::info!(
            total = report.total_predictions,
            labeled = report.labeled_samples,
            overall = ?report.overall_accuracy,
            rolling = ?report.rolling_accuracy,
            "accuracy check complete"
        );
        Ok(report)
    }
}

fn cells<'a>(log: &'a PredictionLog, name: &str) -> impl Iterator<Item = &'a str> + 'a {
    log.column(name).into_iter().flatten()
}

/// `is_correct` when it reads as a number, else `prediction == true_label` numerically.
fn row_correctness(is_correct: &str, prediction: &str, label: &Value) -> Option<bool> {
    if let Some(flag) = Value::from_csv_cell(is_correct).as_number() {
        return Some(flag != 0.0);
    }
    let prediction = Value::from_csv_cell(prediction).as_number()?;
    let label = label.as_number()?;
    Some(prediction == label)
}
