//! Utilities for records output format

use std::path::Path;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the records header line for a command
pub fn header_line(mode: &str, extra: &[(&str, String)]) -> String {
    let mut line = format!("H rulekit=1 records=1 mode={}", mode);
    for (key, value) in extra {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Format a rule D-line: `D rule <kind> "<text>"` plus optional fields
pub fn rule_line(kind: &str, text: &str, extra: &[(&str, String)]) -> String {
    let mut line = format!("D rule {} \"{}\"", kind, escape_quotes(text));
    for (key, value) in extra {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Convert an absolute path to a path relative to the current working directory
pub fn path_relative_to_cwd(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        path.strip_prefix(&cwd)
            .ok()
            .map(|p| {
                let s = p.display().to_string();
                if s.is_empty() {
                    ".".to_string()
                } else {
                    s
                }
            })
            .unwrap_or_else(|| path.display().to_string())
    } else {
        path.display().to_string()
    }
}
