use std::path::Path;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, export::export, import::import, init::init},
};
use crate::core::SyncContext;

/// Dispatch to the command handler.
///
/// Configuration is looked up from `start_dir`; `init` writes its file there.
pub fn run(Arguments { command }: Arguments, start_dir: &Path) -> Result<CommandResult> {
    match command {
        Some(Command::Export(_)) => export(&SyncContext::new(start_dir)?),
        Some(Command::Import(_)) => import(&SyncContext::new(start_dir)?),
        Some(Command::Check(_)) => check(&SyncContext::new(start_dir)?),
        Some(Command::Init) => init(start_dir),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
