use crate::cli::support::TestProject;
use predicates::prelude::*;

#[test]
fn test_suggest_from_sources() {
    let project = TestProject::new();
    std::fs::write(project.path().join("app.js"), "var count = 0;\n").unwrap();
    std::fs::write(project.path().join("tool.py"), "def run():\n    return 1\n").unwrap();

    project
        .cmd()
        .arg("suggest")
        .assert()
        .success()
        .stdout(predicate::str::contains("Avoid `var`; prefer `let`/`const`. (from app.js)"))
        .stdout(predicate::str::contains("Add docstrings to Python functions."))
        .stdout(predicate::str::contains("rulekit suggest --apply"));

    // listing alone changes nothing
    assert!(!project.path().join(".rulekit/state.json").exists());
}

#[test]
fn test_suggest_apply_adds_personal_rules() {
    let project = TestProject::new();
    std::fs::write(project.path().join("index.ts"), "var x = 1;\n").unwrap();

    let json = project.run_json(&["suggest", "--apply"]);
    assert_eq!(json["applied"], true);
    assert_eq!(
        json["added"],
        serde_json::json!(["Avoid `var`; prefer `let`/`const`."])
    );

    let again = project.run_json(&["suggest", "--apply"]);
    assert!(again["added"].as_array().unwrap().is_empty());
}

#[test]
fn test_suggest_clean_project() {
    let project = TestProject::new();
    std::fs::write(project.path().join("main.js"), "const ok = true;\n").unwrap();

    project
        .cmd()
        .arg("suggest")
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions"));
}
