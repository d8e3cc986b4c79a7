use std::path::{Path, PathBuf};

use anyhow::Result;
use glob::Pattern;

use crate::config::{Config, load_config};

/// Project settings shared by every command.
///
/// Configuration is loaded from the nearest `.i18nsyncrc.json` (walking up
/// from the start directory); without one, built-in defaults apply and the
/// start directory is the project root.
#[derive(Debug)]
pub struct SyncContext {
    pub config: Config,
    /// Directory that component ids and configured paths are relative to.
    pub root: PathBuf,
    pub ignores: Vec<Pattern>,
}

impl SyncContext {
    pub fn new(start_dir: &Path) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        let ignores = loaded.config.ignore_patterns()?;
        Ok(Self {
            config: loaded.config,
            root: loaded.root,
            ignores,
        })
    }

    /// Build a context directly from a config, without touching the disk.
    pub fn with_config(root: impl Into<PathBuf>, config: Config) -> Result<Self> {
        config.validate()?;
        let ignores = config.ignore_patterns()?;
        Ok(Self {
            config,
            root: root.into(),
            ignores,
        })
    }

    /// Absolute path of a component id.
    pub fn resolve(&self, component: &str) -> PathBuf {
        self.root.join(component)
    }
}
