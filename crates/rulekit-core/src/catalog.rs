//! Built-in rule lists and language templates

use std::collections::BTreeMap;

/// Built-in default rules, in display order
pub const DEFAULT_RULES: &[&str] = &[
    "Always give high-level context at the top of a file or function.",
    "Write detailed, specific instructions in comments to guide the assistant.",
    "Use clear, descriptive names for variables and functions.",
    "Follow the style conventions and best practices of the language.",
    "Add input/output examples or use cases in comments when useful.",
    "Prefer simple, safe and easily maintainable solutions.",
    "When code is complex, explain it in detail in comments.",
    "Never propose code that contains sensitive data or credentials.",
    "Iterate on and refine instructions based on the results you get.",
    "Document effective instructions and share them with the team.",
];

/// Built-in memory rules, in display order
pub const MEMORY_RULES: &[&str] = &[
    "Create and maintain a README file with the project's guidelines and rules.",
    "Create a STATUS.md file to track progress, decisions and important changes.",
    "Update these files regularly to give context to both developers and AI tools.",
    "Use these files as a reference for the assistant and for code review.",
];

const BUILTIN_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "JavaScript",
        &[
            "Always use let/const instead of var.",
            "Follow camelCase for variable and function names.",
            "Add JSDoc to public methods.",
            "Avoid nested callbacks; prefer async/await or Promises.",
            "Never leave console.log in production code.",
        ],
    ),
    (
        "Python",
        &[
            "Follow PEP8 for naming and style.",
            "Use docstrings for functions and classes.",
            "Avoid wildcard imports (from module import *).",
            "Handle exceptions explicitly.",
            "Use type hints where possible.",
        ],
    ),
    (
        "TypeScript",
        &[
            "Always type function parameters and return values.",
            "Avoid any unless strictly necessary.",
            "Use interfaces to structure data.",
            "Prefer const for variables that do not change.",
            "Add comments explaining complex types.",
        ],
    ),
    (
        "React",
        &[
            "Use PascalCase for component names (e.g. MyComponent).",
            "Each component has a single responsibility.",
            "Extract reusable logic into custom hooks.",
            "Use CSS Modules for styling, placed next to the component.",
            "Every component has tests that check it renders correctly.",
            "Avoid oversized components; split them into smaller ones.",
            "Use PropTypes or TypeScript to type props.",
            "Do not leave dead or unused code in components.",
        ],
    ),
    (
        "Node.js",
        &[
            "Always use const/let instead of var.",
            "Handle errors explicitly (try/catch or err callbacks).",
            "Never expose sensitive data in logs.",
            "Organize code into clear, reusable modules.",
            "Use async/await for asynchronous operations.",
            "Always validate user input.",
            "Document APIs with JSDoc or similar tools.",
        ],
    ),
    (
        "Django",
        &[
            "Follow PEP8 for naming and style.",
            "Use Django models for data handling.",
            "Keep business logic out of views; use services.",
            "Protect views with authentication/authorization decorators.",
            "Use Django forms to validate input.",
            "Write tests for every view and model.",
            "Configure security settings correctly (SECRET_KEY, DEBUG, ALLOWED_HOSTS, etc.).",
        ],
    ),
    (
        "Flask",
        &[
            "Follow PEP8 for naming and style.",
            "Use blueprints to organize routes.",
            "Keep business logic out of views; use services or separate modules.",
            "Always validate user input.",
            "Handle exceptions and show clear error messages.",
            "Configure environment variables and secret keys correctly.",
            "Write tests for every endpoint and feature.",
            "Use requirements.txt to manage dependencies.",
        ],
    ),
];

/// Template groups keyed by language/framework name.
///
/// Groups keep insertion order for display; built-ins come first, groups
/// added from configuration follow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    groups: Vec<(String, Vec<String>)>,
}

impl TemplateCatalog {
    /// Catalog holding only the built-in groups
    pub fn builtin() -> Self {
        let groups = BUILTIN_TEMPLATES
            .iter()
            .map(|(name, rules)| {
                (
                    name.to_string(),
                    rules.iter().map(|r| r.to_string()).collect(),
                )
            })
            .collect();
        Self { groups }
    }

    /// Overlay configured groups: same name replaces, new name appends
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, Vec<String>>) -> Self {
        for (name, rules) in overrides {
            self.insert(name.clone(), rules.clone());
        }
        self
    }

    pub fn insert(&mut self, name: String, rules: Vec<String>) {
        match self.groups.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = rules,
            None => self.groups.push((name, rules)),
        }
    }

    /// Rules for a group name, exact match only
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rules)| rules.as_slice())
    }

    /// Canonical group name for a case-insensitive lookup
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|(n, _)| n == name)
            .or_else(|| self.groups.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)))
            .map(|(n, _)| n.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(n, _)| n.as_str())
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(n, rules)| (n.as_str(), rules.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// The full set of rules a user can pick from
#[derive(Debug, Clone)]
pub struct Catalog {
    pub default_rules: Vec<String>,
    pub memory_rules: Vec<String>,
    pub templates: TemplateCatalog,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            default_rules: DEFAULT_RULES.iter().map(|r| r.to_string()).collect(),
            memory_rules: MEMORY_RULES.iter().map(|r| r.to_string()).collect(),
            templates: TemplateCatalog::builtin(),
        }
    }

    /// Built-in catalog with configured template groups overlaid
    pub fn with_templates(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let mut catalog = Self::builtin();
        catalog.templates = catalog.templates.with_overrides(overrides);
        catalog
    }
}
