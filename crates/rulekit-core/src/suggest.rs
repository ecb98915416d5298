//! Rule suggestions from a scan of the project's source files

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

pub const AVOID_VAR_RULE: &str = "Avoid `var`; prefer `let`/`const`.";
pub const PYTHON_DOCSTRING_RULE: &str = "Add docstrings to Python functions.";

/// Files inspected per language before giving up
pub const MAX_FILES_PER_LANGUAGE: usize = 20;

const SKIPPED_DIRS: &[&str] = &["node_modules", "venv", ".venv", "target", ".git"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub rule: String,
    /// First file that triggered the suggestion
    pub evidence: String,
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn has_extension(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| exts.contains(&e))
}

/// Project files with one of `exts`, at most `limit` of them
fn source_files(root: &Path, exts: &[&str], limit: usize) -> Vec<std::path::PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && has_extension(e.path(), exts))
        .map(|e| e.into_path())
        .take(limit)
        .collect()
}

/// True if the source uses the `var` keyword
pub fn uses_var(source: &str) -> bool {
    match Regex::new(r"\bvar\b") {
        Ok(re) => re.is_match(source),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to compile var regex");
            false
        }
    }
}

/// True if some `def` is not followed by a docstring
pub fn has_undocumented_function(source: &str) -> bool {
    let def_re = match Regex::new(r"^\s*(async\s+)?def\s+\w+\s*\(.*\).*:\s*$") {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to compile def regex");
            return false;
        }
    };

    let lines: Vec<&str> = source.lines().collect();
    lines.iter().enumerate().any(|(idx, line)| {
        if !def_re.is_match(line) {
            return false;
        }
        let body = lines[idx + 1..].iter().map(|l| l.trim()).find(|l| !l.is_empty());
        !matches!(body, Some(l) if l.starts_with("\"\"\"") || l.starts_with("'''"))
    })
}

/// Scan `root` and return rule suggestions
#[tracing::instrument(skip(root), fields(root = %root.display()))]
pub fn suggest_rules(root: &Path) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let scans: [(&[&str], fn(&str) -> bool, &str); 2] = [
        (&["js", "ts"], uses_var, AVOID_VAR_RULE),
        (&["py"], has_undocumented_function, PYTHON_DOCSTRING_RULE),
    ];

    for (exts, check, rule) in scans {
        let hit = source_files(root, exts, MAX_FILES_PER_LANGUAGE)
            .into_iter()
            .find(|path| match fs::read_to_string(path) {
                Ok(source) => check(&source),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "skipping unreadable file");
                    false
                }
            });
        if let Some(path) = hit {
            let evidence = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .display()
                .to_string();
            suggestions.push(Suggestion {
                rule: rule.to_string(),
                evidence,
            });
        }
    }

    tracing::debug!(count = suggestions.len(), "suggestions");
    suggestions
}
