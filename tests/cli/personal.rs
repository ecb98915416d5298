use crate::cli::support::TestProject;
use predicates::prelude::*;

#[test]
fn test_personal_add_show_remove() {
    let project = TestProject::new();
    project.run(&["personal", "add", "Use Result for fallible code."]);
    project.run(&["personal", "add", "Keep modules small."]);

    project
        .cmd()
        .args(["personal", "show"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "Use Result for fallible code.\nKeep modules small.\n",
        ));

    project.run(&["personal", "remove", "keep modules SMALL."]);
    let json = project.run_json(&["personal", "show"]);
    assert_eq!(json["rules"], serde_json::json!(["Use Result for fallible code."]));
}

#[test]
fn test_personal_add_duplicate_is_skipped() {
    let project = TestProject::new();
    project.run(&["personal", "add", "No magic numbers."]);

    let json = project.run_json(&["personal", "add", "  no magic numbers.  "]);
    assert_eq!(json["status"], "exists");
}

#[test]
fn test_personal_remove_missing_is_not_found() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["personal", "remove", "nothing here"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("personal rule not found"));
}

#[test]
fn test_personal_set_from_stdin_drops_blank_lines() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["personal", "set"])
        .write_stdin("First\n\n   \r\n  Second  \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 personal rule(s)"));

    let json = project.run_json(&["active"]);
    assert_eq!(json["rules"], serde_json::json!(["First", "Second"]));
}

#[test]
fn test_personal_empty_add_is_usage_error() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["personal", "add", "   "])
        .assert()
        .code(2);
}
