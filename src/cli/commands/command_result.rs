use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::ConsistencyReport;

#[derive(Debug)]
pub enum CommandSummary {
    Export(ExportSummary),
    Import(ImportSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExportSummary {
    /// Component files and per-component files that were read.
    pub source_files: Vec<String>,
    /// Per-language files written.
    pub written_files: Vec<String>,
    pub component_count: usize,
    pub language_count: usize,
}

#[derive(Debug)]
pub struct ImportSummary {
    /// Per-language files that were read.
    pub source_files: Vec<String>,
    /// Components whose storage was rewritten.
    pub written_files: Vec<String>,
    /// Components with no writable storage.
    pub skipped_components: Vec<String>,
    pub language_count: usize,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub source_files: Vec<String>,
    pub component_count: usize,
    pub language_count: usize,
    pub report: ConsistencyReport,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Consistency violations found; any makes the command fail.
    pub error_count: usize,
    /// Problems that did not stop the command (bad patterns, skipped files).
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, warnings: Vec<String>) -> Self {
        let error_count = match &summary {
            CommandSummary::Check(check) => check.report.len(),
            _ => 0,
        };
        Self {
            summary,
            error_count,
            warnings,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
