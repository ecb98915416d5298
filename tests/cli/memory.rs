use crate::cli::support::TestProject;
use predicates::prelude::*;

#[test]
fn test_memory_enable_includes_selected_rules() {
    let project = TestProject::new();
    project.run(&["toggle", "memory", "1"]);
    project.run(&["memory", "enable"]);

    let json = project.run_json(&["active"]);
    assert_eq!(json["memory_enabled"], true);
    assert_eq!(
        json["rules"][0],
        "Create and maintain a README file with the project's guidelines and rules."
    );

    project.run(&["memory", "disable"]);
    let json = project.run_json(&["active"]);
    assert!(json["rules"].as_array().unwrap().is_empty());
}

#[test]
fn test_memory_disable_keeps_selection() {
    let project = TestProject::new();
    project.run(&["memory", "enable"]);
    project.run(&["toggle", "memory", "3"]);
    project.run(&["memory", "disable"]);

    let json = project.run_json(&["memory", "enable"]);
    assert_eq!(json["selected_memory"].as_array().unwrap().len(), 1);
}

#[test]
fn test_memory_files_created_then_skipped() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["memory", "files"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(project.path().join("README.md").exists());
    let status = std::fs::read_to_string(project.path().join("STATUS.md")).unwrap();
    assert!(status.contains("- Date: "));

    std::fs::write(project.path().join("README.md"), "my readme").unwrap();
    project
        .cmd()
        .args(["memory", "files"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept existing"));
    assert_eq!(
        std::fs::read_to_string(project.path().join("README.md")).unwrap(),
        "my readme"
    );
}

#[test]
fn test_memory_files_force_overwrites() {
    let project = TestProject::new();
    std::fs::write(project.path().join("STATUS.md"), "old").unwrap();

    let json = project.run_json(&["memory", "files", "--force"]);
    let outcomes: Vec<&str> = json["files"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["outcome"].as_str())
        .collect();
    assert_eq!(outcomes, vec!["created", "overwritten"]);
}
