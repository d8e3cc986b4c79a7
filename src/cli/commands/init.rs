use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default configuration file into `dir`.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()? + "\n")
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult::new(
        CommandSummary::Init(InitSummary { path: config_path }),
        Vec::new(),
    ))
}
