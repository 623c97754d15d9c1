//! E2E tests for the `streak` binary.
//!
//! Each test runs the binary as a subprocess against a JSON input file in an
//! isolated temp directory and checks the rendered output and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Build a Command targeting the streak binary, rooted in `dir`.
fn streak_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("streak"));
    cmd.current_dir(dir);
    // Suppress tracing output that goes to stderr
    cmd.env("STREAK_LOG", "error");
    cmd
}

/// Write `records` to `<dir>/logins.json` and return its path as a string.
fn write_input(dir: &Path, records: &Value) -> String {
    let path = dir.join("logins.json");
    fs::write(&path, serde_json::to_string(records).expect("serializable")).expect("write input");
    path.to_string_lossy().into_owned()
}

fn mixed_workload() -> Value {
    json!([
        {"user_id": 1, "login_date": "2024-11-01T08:00:00"},
        {"user_id": 1, "login_date": "2024-11-02T09:00:00"},
        {"user_id": 1, "login_date": "2024-11-04T10:30:00"},
        {"user_id": 1, "login_date": "2024-11-05T11:00:00"},
        {"user_id": 6},
    ])
}

#[test]
fn json_output_matches_contract() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(dir.path(), &mixed_workload());

    let output = streak_cmd(dir.path())
        .args([input.as_str(), "--json"])
        .output()
        .expect("streak should not crash");
    assert!(
        output.status.success(),
        "streak failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let results: Value =
        serde_json::from_slice(&output.stdout).expect("--json should produce valid JSON");
    assert_eq!(
        results,
        json!([
            {"user_id": 1, "longest_sequence": 2, "start_date": "2024-11-01", "end_date": "2024-11-02"},
            {"user_id": 6, "longest_sequence": 0, "start_date": null, "end_date": null},
        ])
    );
}

#[test]
fn writes_output_file_when_requested() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(dir.path(), &mixed_workload());
    let out_path = dir.path().join("results.json");
    let out_arg = out_path.to_string_lossy();

    streak_cmd(dir.path())
        .args([input.as_str(), "--output", out_arg.as_ref(), "--json"])
        .assert()
        .success();

    let saved: Value = serde_json::from_str(&fs::read_to_string(&out_path).expect("readable"))
        .expect("saved file is valid JSON");
    assert_eq!(saved.as_array().map(Vec::len), Some(2));
    assert_eq!(saved[0]["longest_sequence"], 2);
}

#[test]
fn empty_input_produces_empty_collection() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(dir.path(), &json!([]));

    streak_cmd(dir.path())
        .args([input.as_str(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

#[test]
fn missing_input_file_fails_with_not_found() {
    let dir = TempDir::new().expect("tempdir");

    streak_cmd(dir.path())
        .args(["does-not-exist.json", "--json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn malformed_input_fails_cleanly() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ definitely not an array").expect("write input");
    let path_arg = path.to_string_lossy();

    streak_cmd(dir.path())
        .args([path_arg.as_ref(), "--json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array"));
}

#[test]
fn text_mode_emits_tab_separated_rows() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(dir.path(), &mixed_workload());

    let output = streak_cmd(dir.path())
        .args([input.as_str(), "--format", "text"])
        .output()
        .expect("streak should not crash");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).expect("utf8");
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows, vec!["1\t2\t2024-11-01\t2024-11-02", "6\t0\t-\t-"]);
}

#[test]
fn pretty_mode_renders_a_table() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_input(dir.path(), &mixed_workload());

    streak_cmd(dir.path())
        .args([input.as_str(), "--format", "pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user"))
        .stdout(predicate::str::contains("2 users"));
}
