//! Translation payload codec.
//!
//! Payloads are YAML or JSON documents. Nested message objects are flattened
//! to dotted key paths when read and nested again when written:
//!
//! ```yaml
//! en:
//!   nav:
//!     home: Home     # -> "nav.home" = "Home"
//!   items: 3         # -> "items" = 3
//! ```
//!
//! Leaves keep their scalar kind, so numbers and booleans are written back
//! unquoted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::store::{Document, TranslationUnit};

/// Serialization format of a payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    /// Format for a file extension (`yml`, `yaml`, `json`).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "yml" | "yaml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Format of an `<i18n>` block from its `lang` attribute.
    ///
    /// Blocks without a `lang` attribute are YAML.
    pub fn from_block_lang(lang: Option<&str>) -> Self {
        match lang {
            Some(lang) if lang.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

    /// Extension used when writing files in this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Yaml => "yml",
            Format::Json => "json",
        }
    }
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("top level must be a mapping")]
    NotAMapping,
    #[error("messages for '{0}' must be a mapping")]
    SectionNotAMapping(String),
    #[error("lists are not supported (at '{0}')")]
    UnsupportedList(String),
    #[error("key '{0}' is defined more than once")]
    DuplicateKey(String),
}

fn parse_value(content: &str, format: Format) -> Result<Value, PayloadError> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    let value = match format {
        Format::Yaml => serde_yaml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    Ok(value)
}

/// Parse a document whose top-level keys are languages or components.
pub fn parse_document(content: &str, format: Format) -> Result<Document, PayloadError> {
    match parse_value(content, format)? {
        Value::Null => Ok(Document::new()),
        Value::Object(sections) => sections
            .into_iter()
            .map(|(name, messages)| -> Result<(String, TranslationUnit), PayloadError> {
                let unit = match messages {
                    Value::Object(map) => flatten(&map)?,
                    Value::Null => TranslationUnit::new(),
                    _ => return Err(PayloadError::SectionNotAMapping(name)),
                };
                Ok((name, unit))
            })
            .collect(),
        _ => Err(PayloadError::NotAMapping),
    }
}

/// Parse a document holding the messages of a single language.
pub fn parse_unit(content: &str, format: Format) -> Result<TranslationUnit, PayloadError> {
    match parse_value(content, format)? {
        Value::Null => Ok(TranslationUnit::new()),
        Value::Object(map) => flatten(&map),
        _ => Err(PayloadError::NotAMapping),
    }
}

fn flatten(map: &Map<String, Value>) -> Result<TranslationUnit, PayloadError> {
    let mut unit = TranslationUnit::new();
    flatten_into(map, "", &mut unit)?;
    Ok(unit)
}

fn flatten_into(
    map: &Map<String, Value>,
    prefix: &str,
    unit: &mut TranslationUnit,
) -> Result<(), PayloadError> {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(inner) => flatten_into(inner, &path, unit)?,
            Value::Array(_) => return Err(PayloadError::UnsupportedList(path)),
            scalar => {
                if unit.contains_key(&path) {
                    return Err(PayloadError::DuplicateKey(path));
                }
                unit.insert(path, scalar.clone());
            }
        }
    }
    Ok(())
}

/// Insert a value at a nested path, creating intermediate objects as needed.
///
/// When an intermediate segment already holds a plain message, the rest of
/// the path is kept as a single dotted key at that level so that neither
/// message is lost.
fn insert_nested(root: &mut Map<String, Value>, path: &[&str], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };
    if rest.is_empty() {
        root.insert(first.to_string(), value);
        return;
    }

    match root.get_mut(*first) {
        Some(Value::Object(inner)) => insert_nested(inner, rest, value),
        Some(_) => {
            root.insert(path.join("."), value);
        }
        None => {
            let mut inner = Map::new();
            insert_nested(&mut inner, rest, value);
            root.insert(first.to_string(), Value::Object(inner));
        }
    }
}

fn nest_unit(unit: &TranslationUnit) -> Value {
    let mut root = Map::new();
    for (key, message) in unit {
        let path: Vec<&str> = key.split('.').collect();
        insert_nested(&mut root, &path, message.clone());
    }
    Value::Object(root)
}

fn render_value(value: &Value, format: Format) -> Result<String, PayloadError> {
    match format {
        Format::Yaml => Ok(serde_yaml::to_string(value)?),
        Format::Json => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
    }
}

/// Serialize a document, nesting each unit's dotted keys.
pub fn render_document(document: &Document, format: Format) -> Result<String, PayloadError> {
    let sections: Map<String, Value> = document
        .iter()
        .map(|(name, unit)| (name.clone(), nest_unit(unit)))
        .collect();
    render_value(&Value::Object(sections), format)
}

/// Serialize the messages of a single language.
pub fn render_unit(unit: &TranslationUnit, format: Format) -> Result<String, PayloadError> {
    render_value(&nest_unit(unit), format)
}
