//! Legacy JSON sidecar
//!
//! Older consumers read `{ "version": 1, "rules": [...] }` from a per-user
//! config directory. It is written on every save as a mirror of the merged
//! rules. Readers must also accept the richer
//! `{ "rules": [{ "text": ..., "active": ... }] }` shape.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulekitError};

pub const LEGACY_VERSION: u32 = 1;
pub const LEGACY_FILE_NAME: &str = "rules.json";

/// The document written to the sidecar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyDocument {
    pub version: u32,
    pub rules: Vec<String>,
}

impl LegacyDocument {
    pub fn new(rules: Vec<String>) -> Self {
        Self {
            version: LEGACY_VERSION,
            rules,
        }
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One entry of the richer sidecar shape
#[derive(Debug, Clone, Deserialize)]
struct RichRule {
    text: String,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RuleEntries {
    Plain(Vec<String>),
    Rich(Vec<RichRule>),
}

/// `version` is ignored on read; both shapes carry `rules`
#[derive(Debug, Deserialize)]
struct AnyLegacyDocument {
    rules: RuleEntries,
}

/// Rules read back from a sidecar, bucketed by their active flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LegacyRules {
    pub active: Vec<String>,
    pub inactive: Vec<String>,
}

/// Parse either sidecar shape.
///
/// Plain string entries are all active. Object entries are bucketed by
/// `active`, which defaults to true when missing.
pub fn parse_legacy(text: &str, source: &Path) -> Result<LegacyRules> {
    let doc: AnyLegacyDocument = serde_json::from_str(text)
        .map_err(|e| RulekitError::malformed_import(source, e))?;

    let rules = match doc.rules {
        RuleEntries::Plain(rules) => LegacyRules {
            active: rules,
            inactive: Vec::new(),
        },
        RuleEntries::Rich(entries) => {
            let (active, inactive): (Vec<RichRule>, Vec<RichRule>) =
                entries.into_iter().partition(|r| r.active);
            LegacyRules {
                active: active.into_iter().map(|r| r.text).collect(),
                inactive: inactive.into_iter().map(|r| r.text).collect(),
            }
        }
    };
    Ok(rules)
}

/// Default sidecar location: `<user config dir>/rulekit/rules.json`
pub fn default_legacy_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rulekit").join(LEGACY_FILE_NAME))
}

/// Write the sidecar, creating its directory if needed
#[tracing::instrument(skip(path, rules), fields(path = %path.display(), rules = rules.len()))]
pub fn write_legacy(path: &Path, rules: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| RulekitError::io_operation("create directory", parent.display(), e))?;
    }
    let json = LegacyDocument::new(rules.to_vec()).to_pretty_json()?;
    fs::write(path, json).map_err(|e| RulekitError::io_operation("write", path.display(), e))?;
    Ok(())
}

/// Read a sidecar if it exists
pub fn read_legacy(path: &Path) -> Result<Option<LegacyRules>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)
        .map_err(|e| RulekitError::io_operation("read", path.display(), e))?;
    parse_legacy(&text, path).map(Some)
}
