use crate::cli::support::{rulekit, TestProject};
use predicates::prelude::*;

#[test]
fn test_missing_root_is_data_error() {
    let project = TestProject::new();
    let missing = project.path().join("does-not-exist");

    rulekit()
        .arg("--root")
        .arg(&missing)
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no project folder open"));
}

#[test]
fn test_missing_root_json_envelope() {
    let project = TestProject::new();
    let missing = project.path().join("nope");

    let output = rulekit()
        .arg("--root")
        .arg(&missing)
        .args(["--format", "json", "active"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 3);
    assert_eq!(err["error"]["type"], "missing_workspace");
}

#[test]
fn test_quiet_suppresses_error_message() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["--quiet", "personal", "remove", "absent"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_format_is_usage_error() {
    rulekit()
        .args(["--format", "yaml", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_usage_error_json_envelope() {
    let output = rulekit()
        .args(["--format", "json", "toggle"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "usage_error");
}

#[test]
fn test_corrupt_state_file_is_reported() {
    let project = TestProject::new();
    std::fs::create_dir_all(project.path().join(".rulekit")).unwrap();
    std::fs::write(project.path().join(".rulekit/state.json"), "not json").unwrap();

    project
        .cmd()
        .arg("active")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}
