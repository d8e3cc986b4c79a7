use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ExportSummary};
use crate::core::{ComponentIndexed, SyncContext, read_component_sources, write_language_files};

/// Gather every component's translations into one file per language.
///
/// All sources are read before anything is written, so a broken source
/// leaves the translations directory untouched.
pub fn export(ctx: &SyncContext) -> Result<CommandResult> {
    let scan = read_component_sources(ctx).context("Export aborted")?;
    let store = ComponentIndexed::build(scan.entries);
    let by_language = store.transpose();

    let written_files = write_language_files(ctx, &by_language)?;

    Ok(CommandResult::new(
        CommandSummary::Export(ExportSummary {
            source_files: scan.files,
            written_files,
            component_count: store.len(),
            language_count: by_language.len(),
        }),
        scan.warnings,
    ))
}
