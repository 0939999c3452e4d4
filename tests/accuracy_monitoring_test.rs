//! Integration tests for accuracy monitoring runs

use std::path::Path;

use churn_monitor::config::MonitorConfig;
use churn_monitor::eval::accuracy::{AccuracyConfig, AccuracyReport};
use churn_monitor::monitor::run_accuracy_check;
use churn_monitor::MonitorError;
use tempfile::TempDir;

const LOG: &str = "\
timestamp,request_id,prediction,probability,true_label,is_correct,input_json
2024-05-01T09:00:00,r1,1,0.81,1,1,{}
2024-05-01T09:05:00,r2,0,0.12,,,{}
2024-05-01T17:45:00,r3,1,0.66,0,0,{}
2024-05-02T08:00:00.250,r4,0,0.08,0,1,{}
2024-05-02T12:00:00+02:00,r5,1,0.91,1,1,{}
2024-05-03 23:59:59,r6,0,0.30,1,,{}
";

fn config(dir: &Path, log: &str) -> MonitorConfig {
    let path = dir.join("prediction_logs.csv");
    std::fs::write(&path, log).expect("operation should succeed");
    MonitorConfig {
        prediction_log_path: path,
        out_dir: dir.join("monitoring"),
        ..Default::default()
    }
}

#[test]
fn test_accuracy_report_written() {
    let dir = TempDir::new().expect("operation should succeed");
    let config = config(dir.path(), LOG);

    let report = run_accuracy_check(&config).expect("operation should succeed");
    assert_eq!(report.total_predictions, 6);
    assert_eq!(report.labeled_samples, 5);
    assert_eq!(report.rolling_window, 50);
    // r1, r4, r5 correct; r3 wrong; r6 falls back to prediction != true_label
    assert!((report.overall_accuracy.expect("labels exist") - 0.6).abs() < 1e-12);

    let dates: Vec<String> =
        report.daily_accuracy.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-05-01", "2024-05-02", "2024-05-03"]);
    assert_eq!(report.daily_accuracy[1].samples, 2);
    assert!((report.daily_accuracy[1].accuracy - 1.0).abs() < 1e-12);

    let path = config.accuracy_report_path();
    assert_eq!(path, dir.path().join("monitoring/accuracy_report.json"));
    let written: AccuracyReport = serde_json::from_str(
        &std::fs::read_to_string(&path).expect("report should exist"),
    )
    .expect("report should parse");
    assert_eq!(written.labeled_samples, 5);
    assert_eq!(written.daily_accuracy.len(), 3);
}

#[test]
fn test_rolling_window_from_config() {
    let dir = TempDir::new().expect("operation should succeed");
    let mut config = config(dir.path(), LOG);
    config.accuracy = AccuracyConfig { rolling_window: 2 };
    config.accuracy_report_path = Some(dir.path().join("custom/accuracy.json"));

    let report = run_accuracy_check(&config).expect("operation should succeed");
    // last two scored rows: r5 correct, r6 wrong
    assert!((report.rolling_accuracy.expect("labels exist") - 0.5).abs() < 1e-12);
    assert!(dir.path().join("custom/accuracy.json").exists());
}

#[test]
fn test_unlabeled_log_notes_missing_labels() {
    let dir = TempDir::new().expect("operation should succeed");
    let log = "timestamp,prediction,true_label,is_correct\n2024-05-01T09:00:00,1,,\n";
    let report = run_accuracy_check(&config(dir.path(), log)).expect("operation should succeed");

    assert_eq!(report.labeled_samples, 0);
    assert!(report.overall_accuracy.is_none());
    assert!(report.note.is_some());
}

#[test]
fn test_missing_label_columns_are_fatal() {
    let dir = TempDir::new().expect("operation should succeed");
    let log = "timestamp,prediction,input_json\n2024-05-01T09:00:00,1,{}\n";
    let err = run_accuracy_check(&config(dir.path(), log)).unwrap_err();

    assert!(matches!(err, MonitorError::MissingColumns { .. }));
    assert!(err.is_user_error());
    assert!(err.to_string().contains("true_label"));
}

#[test]
fn test_missing_log_file() {
    let dir = TempDir::new().expect("operation should succeed");
    let config = MonitorConfig {
        prediction_log_path: dir.path().join("absent.csv"),
        out_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let err = run_accuracy_check(&config).unwrap_err();
    assert!(matches!(err, MonitorError::FileNotFound { .. }));
    assert_eq!(err.code(), "E001");
}
