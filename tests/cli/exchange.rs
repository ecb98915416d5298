use crate::cli::support::TestProject;
use predicates::prelude::*;

#[test]
fn test_export_writes_typed_entries() {
    let project = TestProject::new();
    project.run(&["toggle", "default", "2"]);
    project.run(&["personal", "add", "Mine"]);
    let out = project.path().join("export.json");

    project
        .cmd()
        .arg("export")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 rule(s)"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value[0]["type"], "default");
    assert_eq!(value[1], serde_json::json!({"type": "personal", "rule": "Mine"}));
}

#[test]
fn test_export_nothing_selected_writes_nothing() {
    let project = TestProject::new();
    let out = project.path().join("export.json");

    project
        .cmd()
        .arg("export")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("No rules selected"));
    assert!(!out.exists());
}

#[test]
fn test_import_merges_personal_entries() {
    let project = TestProject::new();
    project.run(&["personal", "add", "Existing"]);
    let input = project.path().join("in.json");
    std::fs::write(
        &input,
        r#"[{"type": "default", "rule": "Ignored"},
            {"type": "personal", "rule": "existing"},
            {"type": "personal", "rule": "Imported"}]"#,
    )
    .unwrap();

    let json = project.run_json(&["import", input.to_str().unwrap()]);
    assert_eq!(json["added"], serde_json::json!(["Imported"]));
    assert_eq!(json["skipped"], serde_json::json!(["existing"]));

    let active = project.run_json(&["active"]);
    assert_eq!(active["rules"], serde_json::json!(["Existing", "Imported"]));
}

#[test]
fn test_import_malformed_file() {
    let project = TestProject::new();
    let input = project.path().join("bad.json");
    std::fs::write(&input, "[{\"type\": \"personal\"}]").unwrap();

    project
        .cmd()
        .args(["--format", "json", "import"])
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"malformed_import\""));
}

#[test]
fn test_import_skips_unknown_entry_types() {
    let project = TestProject::new();
    let input = project.path().join("mixed.json");
    std::fs::write(
        &input,
        r#"[{"type": "custom", "rule": "Foreign"},
            {"type": "personal", "rule": "Kept"}]"#,
    )
    .unwrap();

    let json = project.run_json(&["import", input.to_str().unwrap()]);
    assert_eq!(json["added"], serde_json::json!(["Kept"]));

    let active = project.run_json(&["active"]);
    assert_eq!(active["rules"], serde_json::json!(["Kept"]));
}
