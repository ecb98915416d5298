use crate::cli::support::TestProject;
use predicates::prelude::*;

#[test]
fn test_list_fresh_project() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default rules (0)"))
        .stdout(predicate::str::contains("Personal rules (0)"))
        .stdout(predicate::str::contains("No personal rules saved."))
        .stdout(predicate::str::contains("Memory rules (0)"))
        .stdout(predicate::str::contains("rulekit memory enable"))
        .stdout(predicate::str::contains("Rule templates"));
}

#[test]
fn test_list_shows_checked_rules() {
    let project = TestProject::new();
    project.run(&["toggle", "default", "3"]);

    project
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default rules (1)"))
        .stdout(predicate::str::contains(
            "[x] Use clear, descriptive names for variables and functions.",
        ))
        .stdout(predicate::str::contains(
            "[ ] Prefer simple, safe and easily maintainable solutions.",
        ));
}

#[test]
fn test_list_json_tree() {
    let project = TestProject::new();
    project.run(&["memory", "enable"]);

    let json = project.run_json(&["list"]);
    let sections = json.as_array().unwrap();
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[0]["kind"], "default");
    assert_eq!(sections[2]["kind"], "memory");

    let memory_children = sections[2]["children"].as_array().unwrap();
    let actions: Vec<&str> = memory_children
        .iter()
        .filter(|c| c["node"] == "button")
        .filter_map(|c| c["action"].as_str())
        .collect();
    assert_eq!(actions, vec!["create_memory_files", "disable_memory"]);

    let groups = sections[3]["children"].as_array().unwrap();
    assert_eq!(groups[0]["label"], "JavaScript");
    assert_eq!(groups[0]["kind"], "template_group");
}

#[test]
fn test_list_records() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["--format", "records", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H rulekit=1 records=1 mode=list active=0"))
        .stdout(predicate::str::contains("S default label=\"Default rules\" active=0"))
        .stdout(predicate::str::contains("D action enable_memory"))
        .stdout(predicate::str::contains(
            "S template_group label=\"Python\" parent=templates",
        ));
}
