//! Consistency check across languages.
//!
//! The set of languages a project supports is inferred from usage: any
//! language that appears for any component is expected for every component.
//! Within a component, a key is expected in every present language as soon as
//! one of its languages defines it.

use std::collections::BTreeSet;
use std::fmt;

use super::store::{ComponentIndexed, Document};

/// Rule identifier for each violation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingLanguage,
    MissingKey,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingLanguage => write!(f, "missing-language"),
            Rule::MissingKey => write!(f, "missing-key"),
        }
    }
}

/// A single consistency violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The component has no translations at all for `language`.
    MissingLanguage { component: String, language: String },
    /// The component's `language` unit lacks `key`, which another of its
    /// languages defines.
    MissingKey {
        component: String,
        language: String,
        key: String,
    },
}

impl Violation {
    pub fn component(&self) -> &str {
        match self {
            Violation::MissingLanguage { component, .. }
            | Violation::MissingKey { component, .. } => component,
        }
    }

    pub fn language(&self) -> &str {
        match self {
            Violation::MissingLanguage { language, .. }
            | Violation::MissingKey { language, .. } => language,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Violation::MissingLanguage { .. } => Rule::MissingLanguage,
            Violation::MissingKey { .. } => Rule::MissingKey,
        }
    }

    /// Short message without the component, for reports that print the
    /// location separately.
    pub fn message(&self) -> String {
        match self {
            Violation::MissingLanguage { language, .. } => {
                format!("Missing {} translations", language)
            }
            Violation::MissingKey { language, key, .. } => {
                format!("Missing translation for \"{}\" in {}", key, language)
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingLanguage {
                component,
                language,
            } => write!(f, "Missing {} translations in {} file.", language, component),
            Violation::MissingKey {
                component,
                language,
                key,
            } => write!(
                f,
                "Missing translation for {} in {} language in {} file.",
                key, language, component
            ),
        }
    }
}

/// Ordered list of violations. Empty means the project is consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    violations: Vec<Violation>,
}

impl ConsistencyReport {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    pub fn count(&self, rule: Rule) -> usize {
        self.violations.iter().filter(|v| v.rule() == rule).count()
    }

    /// Number of distinct components with at least one violation.
    pub fn component_count(&self) -> usize {
        self.violations
            .iter()
            .map(Violation::component)
            .collect::<BTreeSet<_>>()
            .len()
    }
}

impl IntoIterator for ConsistencyReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConsistencyReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Union of keys across every language of one component.
fn expected_keys(languages: &Document) -> BTreeSet<&str> {
    languages
        .values()
        .flat_map(|unit| unit.keys().map(String::as_str))
        .collect()
}

/// Check every component for missing languages and missing keys.
///
/// Violations are grouped by component in sorted order. Within a component,
/// missing languages come before missing keys; languages and keys are sorted.
pub fn check(store: &ComponentIndexed) -> ConsistencyReport {
    let all_languages = store.languages();
    let mut violations = Vec::new();

    for (component, languages) in store.components() {
        violations.extend(
            all_languages
                .iter()
                .filter(|language| !languages.contains_key(**language))
                .map(|language| Violation::MissingLanguage {
                    component: component.to_string(),
                    language: language.to_string(),
                }),
        );

        let keys = expected_keys(languages);
        for (language, unit) in languages {
            violations.extend(
                keys.iter()
                    .filter(|key| !unit.contains_key(**key))
                    .map(|key| Violation::MissingKey {
                        component: component.to_string(),
                        language: language.clone(),
                        key: key.to_string(),
                    }),
            );
        }
    }

    ConsistencyReport { violations }
}
