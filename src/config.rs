use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::parsers::payload::Format;

pub const CONFIG_FILE_NAME: &str = ".i18nsyncrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for component files carrying `<i18n>` blocks.
    #[serde(default = "default_components")]
    pub components: Vec<String>,
    /// Glob patterns for per-component translation files.
    #[serde(default = "default_lang_files")]
    pub lang_files: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Directory holding one aggregate file per language.
    #[serde(default = "default_translations_dir")]
    pub translations_dir: String,
    /// File name prefix of aggregate files: `<prefix>.<lang>.<ext>`.
    #[serde(default = "default_translations_prefix")]
    pub translations_prefix: String,
    /// Format of aggregate files written by export.
    #[serde(default)]
    pub format: Format,
}

fn default_components() -> Vec<String> {
    vec!["src/**/*.vue".to_string()]
}

fn default_lang_files() -> Vec<String> {
    ["yml", "yaml", "json"]
        .iter()
        .map(|ext| format!("src/**/*.lang.{}", ext))
        .collect()
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_translations_dir() -> String {
    "translations".to_string()
}

fn default_translations_prefix() -> String {
    "translations".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            components: default_components(),
            lang_files: default_lang_files(),
            ignores: default_ignores(),
            translations_dir: default_translations_dir(),
            translations_prefix: default_translations_prefix(),
            format: Format::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid or the translations
    /// prefix cannot be told apart from the language segment.
    pub fn validate(&self) -> Result<()> {
        for (field, patterns) in [
            ("components", &self.components),
            ("langFiles", &self.lang_files),
            ("ignores", &self.ignores),
        ] {
            for pattern in patterns {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in '{}': \"{}\"", field, pattern)
                })?;
            }
        }

        if self.translations_prefix.is_empty() {
            bail!("'translationsPrefix' must not be empty");
        }
        if self.translations_prefix.contains(['.', '/', '\\']) {
            bail!(
                "'translationsPrefix' must not contain '.' or path separators: \"{}\"",
                self.translations_prefix
            );
        }

        Ok(())
    }

    /// Compiled `ignores` patterns.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect()
    }

    /// File name of the aggregate file for `language`.
    pub fn translation_file_name(&self, language: &str) -> String {
        format!(
            "{}.{}.{}",
            self.translations_prefix,
            language,
            self.format.extension()
        )
    }

    /// Language of an aggregate file name, if it follows
    /// `<prefix>.<lang>.<ext>` with a known extension.
    pub fn language_of_translation_file(&self, file_name: &str) -> Option<String> {
        let rest = file_name
            .strip_prefix(self.translations_prefix.as_str())?
            .strip_prefix('.')?;
        let (language, extension) = rest.rsplit_once('.')?;
        Format::from_extension(extension)?;
        (!language.is_empty()).then(|| language.to_string())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative paths in the config resolve against.
    pub root: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
        }),
    }
}
