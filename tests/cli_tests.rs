//! End-to-end CLI tests on a temporary CSV input
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use predicates::prelude::*;
use std::io::Write;

fn sample_csv() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "status,created,updated").unwrap();
    writeln!(file, "COMPLETED,0:00,1:40").unwrap();
    writeln!(file, "COMPLETED,0:10,1:00").unwrap();
    writeln!(file, "ERROR,0:00,5:10").unwrap();
    writeln!(file, "IN_PROGRESS,0:00,0:05").unwrap();
    writeln!(file, "COMPLETED,broken,1:00").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_text_summary_output() {
    let file = sample_csv();
    let mut cmd = assert_cmd::Command::cargo_bin("medir").unwrap();
    cmd.arg(file.path())
        .arg("--arrival-rate")
        .arg("2.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Requests: 4"))
        .stdout(predicate::str::contains("Completed Requests: 2"))
        .stdout(predicate::str::contains(
            "Average Response Time (seconds): 75.00",
        ))
        .stdout(predicate::str::contains("System Stability:"))
        .stdout(predicate::str::contains("Little's Law"));
}

#[test]
fn test_text_reports_dropped_records_on_stderr() {
    let file = sample_csv();
    let mut cmd = assert_cmd::Command::cargo_bin("medir").unwrap();
    cmd.arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Dropped 1 invalid record"));
}

#[test]
fn test_json_format_output() {
    let file = sample_csv();
    let mut cmd = assert_cmd::Command::cargo_bin("medir").unwrap();
    let output = cmd
        .arg(file.path())
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["report"]["total_valid"], 4);
    assert_eq!(value["report"]["stats"]["mean_secs"], 75.0);
}

#[test]
fn test_csv_format_output() {
    let file = sample_csv();
    let mut cmd = assert_cmd::Command::cargo_bin("medir").unwrap();
    cmd.arg(file.path())
        .arg("--format")
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Metric,Value"))
        .stdout(predicate::str::contains("Total Requests,4"))
        .stdout(predicate::str::contains("duration_secs"));
}

#[test]
fn test_summary_only_omits_records() {
    let file = sample_csv();
    let mut cmd = assert_cmd::Command::cargo_bin("medir").unwrap();
    cmd.arg(file.path())
        .arg("--format")
        .arg("csv")
        .arg("--summary-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("duration_secs").not());
}

#[test]
fn test_duration_only_preset_changes_completed_count() {
    let file = sample_csv();
    let mut cmd = assert_cmd::Command::cargo_bin("medir").unwrap();
    cmd.arg(file.path())
        .arg("--exclude")
        .arg("duration-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed Requests: 3"));
}

#[test]
fn test_negative_arrival_rate_fails() {
    let file = sample_csv();
    let mut cmd = assert_cmd::Command::cargo_bin("medir").unwrap();
    cmd.arg(file.path())
        .arg("--arrival-rate=-1.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("arrival rate"));
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = assert_cmd::Command::cargo_bin("medir").unwrap();
    cmd.arg("/no/such/input.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input file"));
}
