//! Tests for accuracy tracking.

use approx::assert_relative_eq;
use chrono::NaiveDate;

use super::*;
use crate::data::PredictionLog;
use crate::error::MonitorError;

fn log(csv: &str) -> PredictionLog {
    PredictionLog::parse("prediction_logs.csv", csv.as_bytes()).unwrap()
}

const LABELED: &str = "\
timestamp,prediction,true_label,is_correct,input_json
2024-05-01T10:00:00,1,1,1,{}
2024-05-01T11:00:00,1,0,0,{}
2024-05-01T12:00:00,0,,,{}
2024-05-02 09:00:00,0,0,,{}
2024-05-02T09:30:00Z,1,0,,{}
not a time,1,1,1,{}
";

#[test]
fn test_overall_and_daily_accuracy() {
    let report = AccuracyTracker::default().evaluate(&log(LABELED)).unwrap();

    assert_eq!(report.total_predictions, 6);
    assert_eq!(report.labeled_samples, 5);
    assert_eq!(report.skipped_samples, 0);
    assert_eq!(report.scored_samples(), 5);
    assert_relative_eq!(report.overall_accuracy.unwrap(), 3.0 / 5.0);
    assert_relative_eq!(report.rolling_accuracy.unwrap(), 3.0 / 5.0);
    assert!(report.note.is_none());

    assert_eq!(report.daily_accuracy.len(), 2);
    let first = &report.daily_accuracy[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    assert_eq!(first.samples, 2);
    assert_relative_eq!(first.accuracy, 0.5);
    let second = &report.daily_accuracy[1];
    assert_eq!(second.date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
    assert_eq!(second.samples, 2);
    assert_relative_eq!(second.accuracy, 0.5);
}

#[test]
fn test_rolling_window_uses_latest_rows() {
    let mut csv = String::from("timestamp,prediction,true_label,is_correct\n");
    for i in 0..10 {
        let correct = usize::from(i >= 7);
        csv.push_str(&format!("2024-05-01T10:00:{i:02},1,1,{correct}\n"));
    }
    let tracker = AccuracyTracker::new(AccuracyConfig { rolling_window: 4 });
    let report = tracker.evaluate(&log(&csv)).unwrap();

    assert_eq!(report.rolling_window, 4);
    assert_relative_eq!(report.overall_accuracy.unwrap(), 0.3);
    assert_relative_eq!(report.rolling_accuracy.unwrap(), 0.75);
}

#[test]
fn test_rolling_window_counts_skipped_labeled_rows() {
    let csv = "timestamp,prediction,true_label,is_correct\n\
               2024-05-01T10:00:00,1,1,1\n\
               2024-05-01T10:01:00,1,0,0\n\
               2024-05-01T10:02:00,Yes,Yes,\n\
               2024-05-01T10:03:00,0,,\n";
    let tracker = AccuracyTracker::new(AccuracyConfig { rolling_window: 2 });
    assert_eq!(tracker.config().rolling_window, 2);
    let report = tracker.evaluate(&log(csv)).unwrap();

    assert_eq!(report.labeled_samples, 3);
    assert_eq!(report.skipped_samples, 1);
    assert_relative_eq!(report.overall_accuracy.unwrap(), 0.5);
    // window holds the incorrect row and the skipped one
    assert_relative_eq!(report.rolling_accuracy.unwrap(), 0.0);
}

#[test]
fn test_rolling_window_of_only_skipped_rows_is_null() {
    let csv = "timestamp,prediction,true_label,is_correct\n\
               2024-05-01T10:00:00,1,1,1\n\
               2024-05-01T10:01:00,Yes,Yes,\n";
    let tracker = AccuracyTracker::new(AccuracyConfig { rolling_window: 1 });
    let report = tracker.evaluate(&log(csv)).unwrap();

    assert_relative_eq!(report.overall_accuracy.unwrap(), 1.0);
    assert_eq!(report.rolling_accuracy, None);
}

#[test]
fn test_no_labels_yields_note() {
    let csv = "timestamp,prediction,true_label,is_correct\n2024-05-01T10:00:00,1,,\n";
    let report = AccuracyTracker::default().evaluate(&log(csv)).unwrap();

    assert_eq!(report.labeled_samples, 0);
    assert!(!report.has_labels());
    assert_eq!(report.overall_accuracy, None);
    assert_eq!(report.rolling_accuracy, None);
    assert!(report.daily_accuracy.is_empty());
    assert!(report.note.as_deref().unwrap().contains("No ground truth labels"));

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["overall_accuracy"].is_null());
}

#[test]
fn test_unusable_correctness_is_skipped() {
    let csv = "timestamp,prediction,true_label,is_correct\n\
               2024-05-01T10:00:00,Yes,Yes,\n\
               2024-05-01T11:00:00,1,1,true\n";
    let report = AccuracyTracker::default().evaluate(&log(csv)).unwrap();

    assert_eq!(report.labeled_samples, 2);
    assert_eq!(report.skipped_samples, 1);
    assert_relative_eq!(report.overall_accuracy.unwrap(), 1.0);
}

#[test]
fn test_missing_columns_listed() {
    let csv = "timestamp,prediction,input_json\n2024-05-01T10:00:00,1,{}\n";
    let err = AccuracyTracker::default().evaluate(&log(csv)).unwrap_err();
    match err {
        MonitorError::MissingColumns { columns, .. } => {
            assert_eq!(columns, vec!["true_label".to_string(), "is_correct".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_timestamp_formats() {
    let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    assert_eq!(parse_timestamp("2024-05-01T10:00:00").unwrap().date(), day);
    assert_eq!(parse_timestamp("2024-05-01T10:00:00.123456").unwrap().date(), day);
    assert_eq!(parse_timestamp("2024-05-01 10:00:00").unwrap().date(), day);
    assert_eq!(parse_timestamp("2024-05-01T23:30:00-05:00").unwrap().date(), day);
    assert_eq!(parse_timestamp("2024-05-01").unwrap().date(), day);
    assert!(parse_timestamp("yesterday").is_none());
    assert!(parse_timestamp("").is_none());
}

#[test]
fn test_config_validation() {
    assert!(AccuracyConfig::default().validate().is_ok());
    assert_eq!(AccuracyConfig::default().rolling_window, 50);
    let err = AccuracyConfig { rolling_window: 0 }.validate().unwrap_err();
    assert!(err.to_string().contains("accuracy.rolling_window"));
}
