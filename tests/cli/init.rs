use crate::cli::support::TestProject;
use predicates::prelude::*;

#[test]
fn test_init_writes_config() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let text = std::fs::read_to_string(project.path().join(".rulekit/config.toml")).unwrap();
    let config: toml::Table = toml::from_str(&text).unwrap();
    assert_eq!(config["version"].as_integer(), Some(1));
    assert_eq!(
        config["instructions_file"].as_str(),
        Some(".github/copilot-instructions.md")
    );
    assert_eq!(config["confirm_overwrite"].as_bool(), Some(true));
}

#[test]
fn test_init_idempotent() {
    let project = TestProject::new();
    project.run(&["init"]);

    let json = project.run_json(&["init"]);
    assert_eq!(json["status"], "exists");
}

#[test]
fn test_init_records_format() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["--format", "records", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H rulekit=1 records=1 mode=init status=created"));
}

#[test]
fn test_config_instructions_file_is_honored() {
    let project = TestProject::new();
    std::fs::create_dir_all(project.path().join(".rulekit")).unwrap();
    std::fs::write(
        project.path().join(".rulekit/config.toml"),
        "instructions_file = \"docs/AGENTS.md\"\n",
    )
    .unwrap();

    project.run(&["personal", "add", "Keep functions short."]);
    project.run(&["save", "--yes"]);

    let text = std::fs::read_to_string(project.path().join("docs/AGENTS.md")).unwrap();
    assert!(text.contains("- Keep functions short."));
    assert!(!project.instructions_path().exists());
}
