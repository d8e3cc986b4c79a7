//! Translation stores and the reshaping between them.
//!
//! A project's translations can be indexed two ways:
//!
//! - [`ComponentIndexed`]: `component → language → key → value`, the way they
//!   live next to the components that use them.
//! - [`LanguageIndexed`]: `language → component → key → value`, the way
//!   translators edit them.
//!
//! The two are exact transposes of each other. Reshaping never mutates the
//! source store; it always builds a new one.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

/// Messages for one component in one language, keyed by dotted key path.
///
/// Values are scalar leaves as read from the payload: strings, numbers,
/// booleans or null. Keeping the kind lets a message be written back the way
/// it was found.
pub type TranslationUnit = BTreeMap<String, Value>;

/// Units keyed by an outer name: languages for a component, or components
/// for a language.
pub type Document = BTreeMap<String, TranslationUnit>;

type Table = BTreeMap<String, Document>;

/// Kind of source location a component keeps its translations in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// `<i18n>` blocks inside a component file.
    Embedded,
    /// A per-component translation file (`*.lang.yml`).
    Standalone,
}

/// One translation unit as produced by the source adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub component: String,
    pub language: String,
    pub unit: TranslationUnit,
}

impl SourceEntry {
    pub fn new(
        component: impl Into<String>,
        language: impl Into<String>,
        unit: TranslationUnit,
    ) -> Self {
        Self {
            component: component.into(),
            language: language.into(),
            unit,
        }
    }
}

/// Insert `unit` at `table[outer][inner]`, replacing any previous unit.
///
/// Units are replaced whole; keys are never merged across duplicates.
fn with_unit(mut table: Table, outer: String, inner: String, unit: TranslationUnit) -> Table {
    table.entry(outer).or_default().insert(inner, unit);
    table
}

fn transpose_table(table: &Table) -> Table {
    table
        .iter()
        .flat_map(|(outer, inner)| {
            inner
                .iter()
                .map(move |(name, unit)| (name.clone(), outer.clone(), unit.clone()))
        })
        .fold(Table::new(), |table, (outer, inner, unit)| {
            with_unit(table, outer, inner, unit)
        })
}

fn inner_names(table: &Table) -> BTreeSet<&str> {
    table
        .values()
        .flat_map(|inner| inner.keys().map(String::as_str))
        .collect()
}

/// Translations indexed by component, then language.
///
/// Every component present has at least one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentIndexed {
    components: Table,
}

impl ComponentIndexed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from source entries, applied in iteration order.
    ///
    /// When the same (component, language) pair appears more than once, the
    /// last entry wins and replaces the earlier unit entirely.
    pub fn build<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = SourceEntry>,
    {
        let components = sources.into_iter().fold(Table::new(), |table, entry| {
            with_unit(table, entry.component, entry.language, entry.unit)
        });
        Self { components }
    }

    /// Return a copy of this store with `unit` set for `component`/`language`.
    pub fn with(
        self,
        component: impl Into<String>,
        language: impl Into<String>,
        unit: TranslationUnit,
    ) -> Self {
        Self {
            components: with_unit(self.components, component.into(), language.into(), unit),
        }
    }

    pub fn get(&self, component: &str, language: &str) -> Option<&TranslationUnit> {
        self.components.get(component)?.get(language)
    }

    /// All languages of one component.
    pub fn languages_of(&self, component: &str) -> Option<&Document> {
        self.components.get(component)
    }

    /// Iterate components in sorted order.
    pub fn components(&self) -> impl Iterator<Item = (&str, &Document)> {
        self.components
            .iter()
            .map(|(component, languages)| (component.as_str(), languages))
    }

    /// Every language used by any component.
    pub fn languages(&self) -> BTreeSet<&str> {
        inner_names(&self.components)
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Reshape into a language-indexed store.
    pub fn transpose(&self) -> LanguageIndexed {
        LanguageIndexed {
            languages: transpose_table(&self.components),
        }
    }
}

impl FromIterator<SourceEntry> for ComponentIndexed {
    fn from_iter<I: IntoIterator<Item = SourceEntry>>(iter: I) -> Self {
        Self::build(iter)
    }
}

/// Translations indexed by language, then component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageIndexed {
    languages: Table,
}

impl LanguageIndexed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from entries read out of per-language files.
    ///
    /// Same last-write-wins rule as [`ComponentIndexed::build`].
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SourceEntry>,
    {
        let languages = entries.into_iter().fold(Table::new(), |table, entry| {
            with_unit(table, entry.language, entry.component, entry.unit)
        });
        Self { languages }
    }

    pub fn get(&self, language: &str, component: &str) -> Option<&TranslationUnit> {
        self.languages.get(language)?.get(component)
    }

    /// Iterate languages in sorted order with their per-component units.
    pub fn languages(&self) -> impl Iterator<Item = (&str, &Document)> {
        self.languages
            .iter()
            .map(|(language, components)| (language.as_str(), components))
    }

    /// Every component mentioned by any language.
    pub fn components(&self) -> BTreeSet<&str> {
        inner_names(&self.languages)
    }

    /// Number of languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Reshape back into a component-indexed store.
    ///
    /// Each component of the result carries every language now known for it,
    /// ready to be written back to wherever that component keeps its
    /// translations.
    pub fn distribute(&self) -> ComponentIndexed {
        ComponentIndexed {
            components: transpose_table(&self.languages),
        }
    }
}

impl FromIterator<SourceEntry> for LanguageIndexed {
    fn from_iter<I: IntoIterator<Item = SourceEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
