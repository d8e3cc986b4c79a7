//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `export`: Gather component translations into one file per language
//! - `import`: Write per-language files back into components
//! - `check`: Report components missing languages or keys
//! - `init`: Initialize the configuration file

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Print the short usage line to stdout.
    pub fn print_usage() {
        println!("{}", Self::command().render_usage());
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Export(cmd) | Command::Import(cmd) | Command::Check(cmd)) => {
                cmd.common.verbose
            }
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// List every file read and written
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Gather component translations into one file per language
    Export(SyncCommand),
    /// Write per-language translation files back into components
    Import(SyncCommand),
    /// Check that every component is translated into every language
    Check(SyncCommand),
    /// Initialize a new .i18nsyncrc.json configuration file
    Init,
}
