//! Export and import of selected rules
//!
//! The exchange file is a JSON array of `{ "type": ..., "rule": ... }`
//! entries. Import only brings in personal rules; entries of any other
//! type, known or not, are ignored.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulekitError};
use crate::rule::{split_personal, RuleKind};
use crate::selection::Selection;
use crate::template::PersonalUpdate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedRule {
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub rule: String,
}

/// Entries for the current selection: default, then memory (when enabled),
/// then personal
pub fn export_entries(selection: &Selection) -> Vec<ExportedRule> {
    let entry = |kind: RuleKind| {
        move |rule: &String| ExportedRule {
            kind,
            rule: rule.clone(),
        }
    };

    let memory: &[String] = if selection.memory_enabled {
        &selection.selected_memory
    } else {
        &[]
    };
    let personal = split_personal(&selection.personal_text);

    selection
        .selected_default
        .iter()
        .map(entry(RuleKind::Default))
        .chain(memory.iter().map(entry(RuleKind::Memory)))
        .chain(personal.iter().map(entry(RuleKind::Personal)))
        .collect()
}

/// Write the export file. Returns the number of entries written.
#[tracing::instrument(skip(path, entries), fields(path = %path.display()))]
pub fn write_export(path: &Path, entries: &[ExportedRule]) -> Result<usize> {
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json).map_err(|e| RulekitError::io_operation("write", path.display(), e))?;
    Ok(entries.len())
}

/// Entry as read from an exchange file. The type stays a plain string so
/// files written by other tools can carry extra kinds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportedEntry {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub rule: Option<String>,
}

impl ImportedEntry {
    fn is_personal(&self) -> bool {
        self.kind == RuleKind::Personal.as_str()
    }
}

/// Parse an exchange file.
///
/// The top level must be an array of objects. A `personal` entry without a
/// string `rule` is malformed; other entries are not inspected further.
pub fn parse_import(text: &str, source: &Path) -> Result<Vec<ImportedEntry>> {
    let entries: Vec<ImportedEntry> =
        serde_json::from_str(text).map_err(|e| RulekitError::malformed_import(source, e))?;
    if let Some(index) = entries
        .iter()
        .position(|e| e.is_personal() && e.rule.is_none())
    {
        return Err(RulekitError::malformed_import(
            source,
            format!("personal entry {} has no rule", index),
        ));
    }
    Ok(entries)
}

/// Read an exchange file and merge its personal rules into `selection`.
///
/// A file that fails to parse leaves `selection` untouched.
pub fn import_into(selection: &mut Selection, path: &Path) -> Result<PersonalUpdate> {
    let text = fs::read_to_string(path)
        .map_err(|e| RulekitError::io_operation("read", path.display(), e))?;
    let entries = parse_import(&text, path)?;

    let personal: Vec<&str> = entries
        .iter()
        .filter(|e| e.is_personal())
        .filter_map(|e| e.rule.as_deref())
        .collect();
    tracing::debug!(
        entries = entries.len(),
        personal = personal.len(),
        "import"
    );
    Ok(selection.add_personal_rules(&personal))
}
