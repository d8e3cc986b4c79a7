use anyhow::{Context, Result};

use super::{CheckSummary, CommandResult, CommandSummary};
use crate::core::{ComponentIndexed, SyncContext, consistency, read_component_sources};

/// Report components that lack a language or a key.
///
/// Every violation counts as an error, so any finding fails the command.
pub fn check(ctx: &SyncContext) -> Result<CommandResult> {
    let scan = read_component_sources(ctx).context("Check aborted")?;
    let store = ComponentIndexed::build(scan.entries);
    let report = consistency::check(&store);

    Ok(CommandResult::new(
        CommandSummary::Check(CheckSummary {
            source_files: scan.files,
            component_count: store.len(),
            language_count: store.languages().len(),
            report,
        }),
        scan.warnings,
    ))
}
