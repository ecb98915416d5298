use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::{tempdir, TempDir};

/// Get a Command for rulekit
pub fn rulekit() -> Command {
    cargo_bin_cmd!("rulekit")
}

/// A temporary project folder with its own legacy sidecar location
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn legacy_path(&self) -> PathBuf {
        self.path().join("sidecar").join("rules.json")
    }

    pub fn instructions_path(&self) -> PathBuf {
        self.path().join(".github").join("copilot-instructions.md")
    }

    /// rulekit pointed at this project, never at the user's config dir
    pub fn cmd(&self) -> Command {
        let mut cmd = rulekit();
        cmd.arg("--root")
            .arg(self.path())
            .arg("--legacy-file")
            .arg(self.legacy_path())
            .env_remove("RUST_LOG")
            .env_remove("RULEKIT_LOG");
        cmd
    }

    /// Run a command that must succeed, returning stdout
    pub fn run(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).output().unwrap();
        assert!(
            output.status.success(),
            "rulekit {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Run a command with `--format json` and parse its stdout
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        serde_json::from_str(&self.run(&full)).unwrap()
    }

    pub fn read_instructions(&self) -> String {
        fs::read_to_string(self.instructions_path()).unwrap()
    }

    /// Bullet lines of the instructions file
    pub fn saved_rules(&self) -> Vec<String> {
        self.read_instructions()
            .lines()
            .filter_map(|line| line.strip_prefix("- "))
            .map(str::to_string)
            .collect()
    }
}
