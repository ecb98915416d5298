//! Rule identity and personal-block parsing
//!
//! A rule is a single line of free text. Two rules are the same rule when
//! their trimmed, lowercased forms match.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulekitError;

/// Where a rule came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Default,
    Personal,
    Memory,
    Template,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Default => "default",
            RuleKind::Personal => "personal",
            RuleKind::Memory => "memory",
            RuleKind::Template => "template",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = RulekitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(RuleKind::Default),
            "personal" => Ok(RuleKind::Personal),
            "memory" => Ok(RuleKind::Memory),
            "template" => Ok(RuleKind::Template),
            other => Err(RulekitError::invalid_value("rule kind", other)),
        }
    }
}

/// Identity key for a rule: trimmed and lowercased
pub fn rule_key(rule: &str) -> String {
    rule.trim().to_lowercase()
}

/// Case-insensitive, trim-normalized equality
pub fn same_rule(a: &str, b: &str) -> bool {
    rule_key(a) == rule_key(b)
}

/// True if `rules` holds an entry equal to `rule` under [`same_rule`]
pub fn contains_rule<S: AsRef<str>>(rules: &[S], rule: &str) -> bool {
    let key = rule_key(rule);
    rules.iter().any(|r| rule_key(r.as_ref()) == key)
}

/// Split a personal-rules block into rules.
///
/// Lines are split on `\n` or `\r\n`; lines that are blank after trimming are
/// dropped and the rest are trimmed.
pub fn split_personal(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join rules back into a personal-rules block
pub fn join_personal<S: AsRef<str>>(rules: &[S]) -> String {
    rules
        .iter()
        .map(|r| r.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trim rules, drop empty ones and later duplicates, keeping the first
/// occurrence of each rule
pub fn dedup_rules<I, S>(rules: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    rules
        .into_iter()
        .filter_map(|r| {
            let rule = r.as_ref().trim();
            (!rule.is_empty() && seen.insert(rule_key(rule))).then(|| rule.to_string())
        })
        .collect()
}
