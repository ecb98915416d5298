//! Rule tree model
//!
//! Every node kind carries only the fields it needs; renderers match on
//! [`TreeNode`] instead of checking a type tag before trusting a field.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::rule::RuleKind;
use crate::selection::Selection;

pub const NO_PERSONAL_RULES: &str = "No personal rules saved.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Default,
    Personal,
    Memory,
    Templates,
    TemplateGroup,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Default => "default",
            SectionKind::Personal => "personal",
            SectionKind::Memory => "memory",
            SectionKind::Templates => "templates",
            SectionKind::TemplateGroup => "template_group",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    EnableMemory,
    DisableMemory,
    CreateMemoryFiles,
}

impl ButtonAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonAction::EnableMemory => "enable_memory",
            ButtonAction::DisableMemory => "disable_memory",
            ButtonAction::CreateMemoryFiles => "create_memory_files",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ButtonAction::EnableMemory => "Enable memory rules",
            ButtonAction::DisableMemory => "Disable memory rules",
            ButtonAction::CreateMemoryFiles => "Create/update README.md and STATUS.md",
        }
    }

    /// CLI invocation that performs this action
    pub fn command(&self) -> &'static str {
        match self {
            ButtonAction::EnableMemory => "rulekit memory enable",
            ButtonAction::DisableMemory => "rulekit memory disable",
            ButtonAction::CreateMemoryFiles => "rulekit memory files",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionNode {
    pub kind: SectionKind,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_count: Option<usize>,
    pub children: Vec<TreeNode>,
}

impl SectionNode {
    /// Label with the active-count badge, e.g. `Default rules (3)`
    pub fn display_label(&self) -> String {
        match self.active_count {
            Some(count) => format!("{} ({})", self.label, count),
            None => self.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleNode {
    pub text: String,
    pub kind: RuleKind,
    /// Checkbox state; `None` for rules without one (personal, template)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonNode {
    pub action: ButtonAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum TreeNode {
    Section(SectionNode),
    Rule(RuleNode),
    Button(ButtonNode),
}

/// Build the top-level sections for a selection
pub fn build_tree(selection: &Selection, catalog: &Catalog) -> Vec<SectionNode> {
    let personal = selection.personal_rules();

    vec![
        default_section(selection, catalog),
        personal_section(&personal),
        memory_section(selection, catalog),
        templates_section(catalog),
    ]
}

fn default_section(selection: &Selection, catalog: &Catalog) -> SectionNode {
    let children = catalog
        .default_rules
        .iter()
        .map(|rule| {
            TreeNode::Rule(RuleNode {
                text: rule.clone(),
                kind: RuleKind::Default,
                checked: Some(selection.is_default_selected(rule)),
                group: None,
            })
        })
        .collect();

    SectionNode {
        kind: SectionKind::Default,
        label: "Default rules".to_string(),
        active_count: Some(selection.selected_default.len()),
        children,
    }
}

fn personal_section(personal: &[String]) -> SectionNode {
    let children = if personal.is_empty() {
        vec![TreeNode::Rule(RuleNode {
            text: NO_PERSONAL_RULES.to_string(),
            kind: RuleKind::Personal,
            checked: None,
            group: None,
        })]
    } else {
        personal
            .iter()
            .map(|rule| {
                TreeNode::Rule(RuleNode {
                    text: rule.clone(),
                    kind: RuleKind::Personal,
                    checked: None,
                    group: None,
                })
            })
            .collect()
    };

    SectionNode {
        kind: SectionKind::Personal,
        label: "Personal rules".to_string(),
        active_count: Some(personal.len()),
        children,
    }
}

fn memory_section(selection: &Selection, catalog: &Catalog) -> SectionNode {
    let children = if selection.memory_enabled {
        catalog
            .memory_rules
            .iter()
            .map(|rule| {
                TreeNode::Rule(RuleNode {
                    text: rule.clone(),
                    kind: RuleKind::Memory,
                    checked: Some(selection.is_memory_selected(rule)),
                    group: None,
                })
            })
            .chain([
                TreeNode::Button(ButtonNode {
                    action: ButtonAction::CreateMemoryFiles,
                }),
                TreeNode::Button(ButtonNode {
                    action: ButtonAction::DisableMemory,
                }),
            ])
            .collect()
    } else {
        vec![TreeNode::Button(ButtonNode {
            action: ButtonAction::EnableMemory,
        })]
    };

    SectionNode {
        kind: SectionKind::Memory,
        label: "Memory rules".to_string(),
        active_count: Some(selection.memory_active_count()),
        children,
    }
}

fn templates_section(catalog: &Catalog) -> SectionNode {
    let children = catalog
        .templates
        .groups()
        .map(|(name, rules)| {
            TreeNode::Section(SectionNode {
                kind: SectionKind::TemplateGroup,
                label: name.to_string(),
                active_count: None,
                children: rules
                    .iter()
                    .map(|rule| {
                        TreeNode::Rule(RuleNode {
                            text: rule.clone(),
                            kind: RuleKind::Template,
                            checked: None,
                            group: Some(name.to_string()),
                        })
                    })
                    .collect(),
            })
        })
        .collect();

    SectionNode {
        kind: SectionKind::Templates,
        label: "Rule templates".to_string(),
        active_count: None,
        children,
    }
}
