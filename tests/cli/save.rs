use crate::cli::support::TestProject;
use predicates::prelude::*;

#[test]
fn test_save_first_time_writes_document_and_sidecar() {
    let project = TestProject::new();
    project.run(&["toggle", "default", "1"]);
    project.run(&["personal", "add", "Use Result for fallible code."]);

    project
        .cmd()
        .arg("save")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 rule(s)"));

    let text = project.read_instructions();
    assert!(text.starts_with(
        "# GitHub Copilot Instructions\n\nThe following rules should be applied when generating code:\n\n- "
    ));
    assert!(text.contains("\n## Last Updated\nThese rules were last updated on "));
    assert_eq!(
        project.saved_rules(),
        vec![
            "Always give high-level context at the top of a file or function.",
            "Use Result for fallible code."
        ]
    );

    let sidecar: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(project.legacy_path()).unwrap()).unwrap();
    assert_eq!(sidecar["version"], 1);
    assert_eq!(sidecar["rules"].as_array().unwrap().len(), 2);
}

#[test]
fn test_save_merges_additively() {
    let project = TestProject::new();
    std::fs::create_dir_all(project.path().join(".github")).unwrap();
    std::fs::write(
        project.instructions_path(),
        "# Notes\n\n- A\n- B\n\nsome prose\n",
    )
    .unwrap();
    project.run(&["personal", "set", "b\nC"]);

    let json = project.run_json(&["save", "--yes"]);
    assert_eq!(json["status"], "saved");
    assert_eq!(json["new_rules"], serde_json::json!(["C"]));
    assert_eq!(json["duplicate_rules"], serde_json::json!(["b"]));
    assert_eq!(json["inactive_rules"], serde_json::json!(["A"]));
    assert_eq!(project.saved_rules(), vec!["A", "B", "C"]);
}

#[test]
fn test_save_declined_leaves_file() {
    let project = TestProject::new();
    project.run(&["personal", "add", "One"]);
    project.run(&["save"]);
    let before = project.read_instructions();

    project.run(&["personal", "add", "Two"]);
    project
        .cmd()
        .arg("save")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("left unchanged"));

    assert_eq!(project.read_instructions(), before);
}

#[test]
fn test_save_confirmed_on_stdin() {
    let project = TestProject::new();
    project.run(&["personal", "add", "One"]);
    project.run(&["save"]);
    project.run(&["personal", "add", "Two"]);

    project
        .cmd()
        .args(["--format", "records", "save"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=save status=saved"))
        .stdout(predicate::str::contains("D rule merged \"Two\" state=new"));

    assert_eq!(project.saved_rules(), vec!["One", "Two"]);
}

#[test]
fn test_save_without_prompt_when_configured() {
    let project = TestProject::new();
    std::fs::create_dir_all(project.path().join(".rulekit")).unwrap();
    std::fs::write(
        project.path().join(".rulekit/config.toml"),
        "confirm_overwrite = false\n",
    )
    .unwrap();
    project.run(&["personal", "add", "One"]);
    project.run(&["save"]);
    project.run(&["personal", "add", "Two"]);
    project.run(&["save"]);

    assert_eq!(project.saved_rules(), vec!["One", "Two"]);
}

#[test]
fn test_save_twice_is_stable() {
    let project = TestProject::new();
    project.run(&["personal", "set", "X\nY"]);
    project.run(&["save", "--yes"]);

    let json = project.run_json(&["save", "--yes"]);
    assert!(json["new_rules"].as_array().unwrap().is_empty());
    assert_eq!(project.saved_rules(), vec!["X", "Y"]);
}

#[test]
fn test_save_does_not_touch_selection() {
    let project = TestProject::new();
    project.run(&["personal", "add", "Only"]);
    let state_before =
        std::fs::read_to_string(project.path().join(".rulekit/state.json")).unwrap();

    project.run(&["save", "--yes"]);
    let state_after =
        std::fs::read_to_string(project.path().join(".rulekit/state.json")).unwrap();
    assert_eq!(state_before, state_after);
}
