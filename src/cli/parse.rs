use rulekit_core::format::OutputFormat;
use rulekit_core::rule::RuleKind;

/// List a `toggle` targets; only the checkbox lists can be toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleList {
    Default,
    Memory,
}

impl ToggleList {
    pub fn kind(&self) -> RuleKind {
        match self {
            ToggleList::Default => RuleKind::Default,
            ToggleList::Memory => RuleKind::Memory,
        }
    }
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse toggle list from string
pub fn parse_toggle_list(s: &str) -> std::result::Result<ToggleList, String> {
    match s.parse::<RuleKind>().map_err(|e| e.to_string())? {
        RuleKind::Default => Ok(ToggleList::Default),
        RuleKind::Memory => Ok(ToggleList::Memory),
        other => Err(format!(
            "{} rules cannot be toggled (expected: default or memory)",
            other
        )),
    }
}
