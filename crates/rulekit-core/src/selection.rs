//! Typed view over the selection store

use serde::Serialize;

use crate::aggregate::aggregate;
use crate::error::Result;
use crate::rule::{contains_rule, join_personal, same_rule, split_personal};
use crate::store::{
    SelectionStore, KEY_MEMORY_ENABLED, KEY_PERSONAL, KEY_SELECTED_DEFAULT, KEY_SELECTED_MEMORY,
};
use crate::template::{add_rules_to_personal, PersonalUpdate};

/// The user's current rule selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub selected_default: Vec<String>,
    pub personal_text: String,
    pub memory_enabled: bool,
    pub selected_memory: Vec<String>,
}

impl Selection {
    pub fn load(store: &dyn SelectionStore) -> Self {
        Self {
            selected_default: store.get_or(KEY_SELECTED_DEFAULT, Vec::new()),
            personal_text: store.get_or(KEY_PERSONAL, String::new()),
            memory_enabled: store.get_or(KEY_MEMORY_ENABLED, false),
            selected_memory: store.get_or(KEY_SELECTED_MEMORY, Vec::new()),
        }
    }

    pub fn save(&self, store: &mut dyn SelectionStore) -> Result<()> {
        store.update(KEY_SELECTED_DEFAULT, &self.selected_default)?;
        store.update(KEY_PERSONAL, &self.personal_text)?;
        store.update(KEY_MEMORY_ENABLED, &self.memory_enabled)?;
        store.update(KEY_SELECTED_MEMORY, &self.selected_memory)?;
        Ok(())
    }

    /// Flip a default rule; returns whether it is now selected
    pub fn toggle_default(&mut self, rule: &str) -> bool {
        toggle(&mut self.selected_default, rule)
    }

    /// Flip a memory rule; returns whether it is now selected.
    ///
    /// Works whether or not memory rules are enabled; the flag only gates
    /// aggregation.
    pub fn toggle_memory(&mut self, rule: &str) -> bool {
        toggle(&mut self.selected_memory, rule)
    }

    pub fn set_memory_enabled(&mut self, enabled: bool) {
        self.memory_enabled = enabled;
    }

    pub fn set_personal_text(&mut self, text: impl Into<String>) {
        self.personal_text = text.into();
    }

    pub fn personal_rules(&self) -> Vec<String> {
        split_personal(&self.personal_text)
    }

    /// Append rules to the personal block, skipping ones already there
    pub fn add_personal_rules<S: AsRef<str>>(&mut self, rules: &[S]) -> PersonalUpdate {
        let update = add_rules_to_personal(&self.personal_text, rules);
        self.personal_text = update.text.clone();
        update
    }

    /// Remove a personal rule (case-insensitive); returns whether one was removed
    pub fn remove_personal_rule(&mut self, rule: &str) -> bool {
        let rules = self.personal_rules();
        if !contains_rule(&rules, rule) {
            return false;
        }
        let kept: Vec<String> = rules.into_iter().filter(|r| !same_rule(r, rule)).collect();
        self.personal_text = join_personal(&kept);
        true
    }

    pub fn is_default_selected(&self, rule: &str) -> bool {
        self.selected_default.iter().any(|r| r == rule)
    }

    pub fn is_memory_selected(&self, rule: &str) -> bool {
        self.selected_memory.iter().any(|r| r == rule)
    }

    /// Memory rules that count toward the active set
    pub fn memory_active_count(&self) -> usize {
        if self.memory_enabled {
            self.selected_memory.len()
        } else {
            0
        }
    }

    /// The Active Rule Set for this selection
    pub fn active_rules(&self) -> Vec<String> {
        aggregate(
            &self.selected_default,
            &self.personal_text,
            self.memory_enabled,
            &self.selected_memory,
        )
    }
}

/// Exact-text toggle, matching how the list was written
fn toggle(selected: &mut Vec<String>, rule: &str) -> bool {
    match selected.iter().position(|r| r == rule) {
        Some(idx) => {
            selected.remove(idx);
            false
        }
        None => {
            selected.push(rule.to_string());
            true
        }
    }
}
