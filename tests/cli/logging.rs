use crate::cli::support::TestProject;
use predicates::prelude::*;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["--log-level", "debug", "active"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("active")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_core_debug_messages() {
    let project = TestProject::new();
    project.run(&["personal", "add", "Logged"]);

    project
        .cmd()
        .args(["--verbose", "save", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("reconcile"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let project = TestProject::new();

    let output = project
        .cmd()
        .args(["--log-level", "debug", "--log-json", "active"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}
