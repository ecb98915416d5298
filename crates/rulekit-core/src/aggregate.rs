//! Rule set aggregation
//!
//! Combines the selected default rules, the personal block and the selected
//! memory rules into the Active Rule Set.

use crate::rule::{dedup_rules, split_personal};

/// Build the Active Rule Set.
///
/// Order is selected-default, then personal (line order), then
/// selected-memory when `memory_enabled`. Later duplicates of an earlier
/// entry (case-insensitive, trimmed) are dropped.
pub fn aggregate<S: AsRef<str>>(
    selected_default: &[S],
    personal_text: &str,
    memory_enabled: bool,
    selected_memory: &[S],
) -> Vec<String> {
    let personal = split_personal(personal_text);
    let memory = if memory_enabled {
        selected_memory
    } else {
        &selected_memory[..0]
    };

    let combined = selected_default
        .iter()
        .map(|r| r.as_ref())
        .chain(personal.iter().map(String::as_str))
        .chain(memory.iter().map(|r| r.as_ref()));

    let active = dedup_rules(combined);
    tracing::debug!(
        default = selected_default.len(),
        personal = personal.len(),
        memory = memory.len(),
        active = active.len(),
        "aggregate"
    );
    active
}
