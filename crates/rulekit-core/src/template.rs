//! Template rule resolution
//!
//! Template rules are never active on their own: picking one copies its text
//! into the personal block.

use crate::catalog::TemplateCatalog;
use crate::rule::{contains_rule, join_personal};

/// Rules for a template group.
///
/// Unknown group names resolve to an empty list; a stale or renamed group
/// is not an error. Exact names win over case-insensitive matches.
pub fn resolve_group(templates: &TemplateCatalog, group: &str) -> Vec<String> {
    match templates.canonical_name(group) {
        Some(name) => templates.get(name).map(<[String]>::to_vec).unwrap_or_default(),
        None => {
            tracing::debug!(group, "unknown template group");
            Vec::new()
        }
    }
}

/// Result of merging rules into the personal block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalUpdate {
    /// New personal block text
    pub text: String,
    /// Rules that were appended
    pub added: Vec<String>,
    /// Rules already present (case-insensitive)
    pub skipped: Vec<String>,
}

impl PersonalUpdate {
    pub fn changed(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Append rules to a personal block, skipping ones already present.
///
/// Existing lines (blank ones included) are kept verbatim; only the new
/// rules are appended.
pub fn add_rules_to_personal<S: AsRef<str>>(personal_text: &str, rules: &[S]) -> PersonalUpdate {
    let mut lines: Vec<String> = if personal_text.is_empty() {
        Vec::new()
    } else {
        personal_text.lines().map(str::to_string).collect()
    };

    let mut added = Vec::new();
    let mut skipped = Vec::new();
    for rule in rules {
        let rule = rule.as_ref().trim();
        if rule.is_empty() {
            continue;
        }
        if contains_rule(&lines, rule) {
            skipped.push(rule.to_string());
        } else {
            lines.push(rule.to_string());
            added.push(rule.to_string());
        }
    }

    PersonalUpdate {
        text: join_personal(&lines),
        added,
        skipped,
    }
}
