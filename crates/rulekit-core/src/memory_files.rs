//! README.md / STATUS.md scaffolding for memory rules

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Result, RulekitError};

pub const README_FILE: &str = "README.md";
pub const STATUS_FILE: &str = "STATUS.md";

const README_CONTENT: &str = "# Project rules

The project's rules and guidelines are collected here.

Keep this file up to date so that both the team and AI assistants share the project's history and context.
";

fn status_content(today: NaiveDate) -> String {
    format!(
        "# Project status

- Date: {}
- Progress: start tracking key decisions, changes and progress here.
",
        today.format("%Y-%m-%d")
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutcome {
    Created,
    Overwritten,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryFileResult {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Write README.md and STATUS.md under `root`.
///
/// Existing files are kept unless `force` is set.
#[tracing::instrument(skip(root), fields(root = %root.display()))]
pub fn create_memory_files(root: &Path, today: NaiveDate, force: bool) -> Result<Vec<MemoryFileResult>> {
    let files = [
        (README_FILE, README_CONTENT.to_string()),
        (STATUS_FILE, status_content(today)),
    ];

    files
        .into_iter()
        .map(|(name, content)| write_one(&root.join(name), &content, force))
        .collect()
}

fn write_one(path: &Path, content: &str, force: bool) -> Result<MemoryFileResult> {
    let outcome = match (path.exists(), force) {
        (true, false) => FileOutcome::Skipped,
        (exists, _) => {
            fs::write(path, content)
                .map_err(|e| RulekitError::io_operation("write", path.display(), e))?;
            if exists {
                FileOutcome::Overwritten
            } else {
                FileOutcome::Created
            }
        }
    };
    tracing::debug!(path = %path.display(), ?outcome, "memory file");
    Ok(MemoryFileResult {
        path: path.to_path_buf(),
        outcome,
    })
}
