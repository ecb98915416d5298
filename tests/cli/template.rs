use crate::cli::support::TestProject;
use predicates::prelude::*;

#[test]
fn test_template_list_groups() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JavaScript (5)"))
        .stdout(predicate::str::contains("Flask"));
}

#[test]
fn test_template_list_group_case_insensitive() {
    let project = TestProject::new();

    let json = project.run_json(&["template", "list", "python"]);
    assert_eq!(json["group"], "Python");
    assert_eq!(json["rules"][0], "Follow PEP8 for naming and style.");
}

#[test]
fn test_template_unknown_group_is_empty() {
    let project = TestProject::new();

    let json = project.run_json(&["template", "list", "Cobol"]);
    assert!(json["rules"].as_array().unwrap().is_empty());

    let json = project.run_json(&["template", "add", "Cobol"]);
    assert!(json["added"].as_array().unwrap().is_empty());
    assert!(!project.path().join(".rulekit/state.json").exists());
}

#[test]
fn test_template_add_group_then_single_rule() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["template", "add", "JavaScript", "--rule", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 1 rule(s) from JavaScript"));

    let json = project.run_json(&["template", "add", "JavaScript"]);
    assert_eq!(json["added"].as_array().unwrap().len(), 4);
    assert_eq!(
        json["skipped"],
        serde_json::json!(["Always use let/const instead of var."])
    );

    let active = project.run_json(&["active"]);
    assert_eq!(active["rules"].as_array().unwrap().len(), 5);
}

#[test]
fn test_template_add_unknown_rule_index() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["template", "add", "Flask", "--rule", "9"])
        .assert()
        .code(3);
}

#[test]
fn test_template_groups_from_config() {
    let project = TestProject::new();
    std::fs::create_dir_all(project.path().join(".rulekit")).unwrap();
    std::fs::write(
        project.path().join(".rulekit/config.toml"),
        "[templates]\nRust = [\"Prefer ? over unwrap.\"]\n",
    )
    .unwrap();

    let json = project.run_json(&["template", "list", "rust"]);
    assert_eq!(json["rules"], serde_json::json!(["Prefer ? over unwrap."]));
}
