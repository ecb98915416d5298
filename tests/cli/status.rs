use crate::cli::support::TestProject;
use predicates::prelude::*;

#[test]
fn test_status_before_save() {
    let project = TestProject::new();
    project.run(&["personal", "add", "Pending rule"]);

    project
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not written yet"))
        .stdout(predicate::str::contains("Not yet saved:"))
        .stdout(predicate::str::contains("+ Pending rule"));
}

#[test]
fn test_status_after_save() {
    let project = TestProject::new();
    project.run(&["personal", "set", "One\nTwo"]);
    project.run(&["save", "--yes"]);
    project.run(&["personal", "add", "Three"]);

    let json = project.run_json(&["status"]);
    assert_eq!(json["instructions_exists"], true);
    assert_eq!(json["saved_rules"], serde_json::json!(["One", "Two"]));
    assert_eq!(json["legacy"]["active"], serde_json::json!(["One", "Two"]));
    assert_eq!(json["unsaved_rules"], serde_json::json!(["Three"]));
}

#[test]
fn test_status_reads_rich_legacy_sidecar() {
    let project = TestProject::new();
    std::fs::create_dir_all(project.legacy_path().parent().unwrap()).unwrap();
    std::fs::write(
        project.legacy_path(),
        r#"{"rules": [{"text": "On", "active": true}, {"text": "Off", "active": false}]}"#,
    )
    .unwrap();

    let json = project.run_json(&["status"]);
    assert_eq!(json["legacy"]["active"], serde_json::json!(["On"]));
    assert_eq!(json["legacy"]["inactive"], serde_json::json!(["Off"]));
}

#[test]
fn test_status_malformed_sidecar_is_data_error() {
    let project = TestProject::new();
    std::fs::create_dir_all(project.legacy_path().parent().unwrap()).unwrap();
    std::fs::write(project.legacy_path(), "{ broken").unwrap();

    project
        .cmd()
        .arg("status")
        .assert()
        .code(3);
}
