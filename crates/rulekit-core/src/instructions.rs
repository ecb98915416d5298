//! Instructions file reconciliation
//!
//! The instructions file is human-edited markdown. Rules are read back with a
//! per-line bullet scan, not a markdown parser, so anything a user adds
//! between the bullets survives only if it is itself a bullet.
//!
//! Reconciliation is additive: rules already in the file are kept even when
//! they are no longer selected, and active rules missing from the file are
//! appended.

use chrono::{DateTime, Local};
use regex::Regex;
use serde::Serialize;

use crate::rule::{dedup_rules, rule_key};

pub const DOCUMENT_HEADER: &str = "# GitHub Copilot Instructions";
pub const DOCUMENT_INTRO: &str = "The following rules should be applied when generating code:";
pub const LAST_UPDATED_HEADING: &str = "## Last Updated";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Extract rules from an instructions document, in file order.
///
/// When the document carries the standard header, only bullets below it
/// count. Documents without it are scanned from the top.
pub fn extract_rules(document: &str) -> Vec<String> {
    let bullet_re = match Regex::new(r"^- (.+)$") {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to compile bullet regex");
            return Vec::new();
        }
    };
    let body = document
        .lines()
        .position(|line| line.trim_end() == DOCUMENT_HEADER)
        .map_or(document.lines().skip(0), |header| document.lines().skip(header + 1));
    body.filter_map(|line| bullet_re.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|rule| !rule.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render an instructions document for the given rules
pub fn render_document<S: AsRef<str>>(rules: &[S], updated_at: &DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str(DOCUMENT_HEADER);
    out.push_str("\n\n");
    out.push_str(DOCUMENT_INTRO);
    out.push_str("\n\n");
    for rule in rules {
        out.push_str("- ");
        out.push_str(rule.as_ref());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(LAST_UPDATED_HEADING);
    out.push('\n');
    out.push_str(&format!(
        "These rules were last updated on {}.\n",
        updated_at.format(TIMESTAMP_FORMAT)
    ));
    out
}

/// Outcome of reconciling active rules against an instructions document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    /// Existing rules followed by the new ones
    pub merged_rules: Vec<String>,
    /// Active rules not yet in the document
    pub new_rules: Vec<String>,
    /// Active rules the document already had
    pub duplicate_rules: Vec<String>,
    /// Rules in the document that are no longer active
    pub inactive_rules: Vec<String>,
    /// Full regenerated document
    #[serde(skip)]
    pub document_text: String,
}

/// Reconcile using the current local time for the footer
pub fn reconcile<S: AsRef<str>>(existing_document: Option<&str>, active_rules: &[S]) -> Reconciliation {
    reconcile_at(existing_document, active_rules, &Local::now())
}

/// Reconcile with an explicit footer timestamp.
///
/// `active_rules` is trimmed and deduplicated first, so `new_rules` and
/// `duplicate_rules` partition the deduplicated active set.
pub fn reconcile_at<S: AsRef<str>>(
    existing_document: Option<&str>,
    active_rules: &[S],
    updated_at: &DateTime<Local>,
) -> Reconciliation {
    let existing = existing_document.map(extract_rules).unwrap_or_default();
    let existing_keys: std::collections::HashSet<String> =
        existing.iter().map(|r| rule_key(r)).collect();

    let (duplicate_rules, new_rules): (Vec<String>, Vec<String>) = dedup_rules(active_rules)
        .into_iter()
        .partition(|rule| existing_keys.contains(&rule_key(rule)));

    let active_keys: std::collections::HashSet<String> = new_rules
        .iter()
        .chain(duplicate_rules.iter())
        .map(|r| rule_key(r))
        .collect();
    let inactive_rules = existing
        .iter()
        .filter(|r| !active_keys.contains(&rule_key(r)))
        .cloned()
        .collect();

    let merged_rules: Vec<String> = existing.into_iter().chain(new_rules.iter().cloned()).collect();
    let document_text = render_document(&merged_rules, updated_at);

    tracing::debug!(
        merged = merged_rules.len(),
        new = new_rules.len(),
        duplicate = duplicate_rules.len(),
        "reconcile"
    );

    Reconciliation {
        merged_rules,
        new_rules,
        duplicate_rules,
        inactive_rules,
        document_text,
    }
}
