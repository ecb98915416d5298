//! Helper functions shared across commands

use std::io::{self, Read};

use rulekit_core::error::{Result, RulekitError};
use rulekit_core::project::Project;
use rulekit_core::selection::Selection;
use rulekit_core::store::JsonFileStore;

/// Selection loaded from a project's state file, saved back on demand
pub struct SelectionSession {
    store: JsonFileStore,
    pub selection: Selection,
}

impl SelectionSession {
    pub fn open(project: &Project) -> Result<Self> {
        let store = project.open_store()?;
        let selection = Selection::load(&store);
        Ok(Self { store, selection })
    }

    pub fn save(&mut self) -> Result<()> {
        self.selection.save(&mut self.store)
    }
}

/// Resolve a rule reference against a list: a 1-based index, or the exact
/// rule text
pub fn resolve_rule_ref<'a>(rules: &'a [String], reference: &str, context: &str) -> Result<&'a str> {
    if let Ok(index) = reference.trim().parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| rules.get(i))
            .map(String::as_str)
            .ok_or_else(|| RulekitError::not_found(context, reference));
    }
    rules
        .iter()
        .find(|r| r.as_str() == reference)
        .map(String::as_str)
        .ok_or_else(|| RulekitError::not_found(context, reference))
}

/// Read all of stdin
pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| RulekitError::io_operation("read", "stdin", e))?;
    Ok(buf)
}
