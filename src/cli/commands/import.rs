use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ImportSummary};
use crate::core::{
    LanguageIndexed, SyncContext, WriteOutcome, read_language_sources, write_components,
};

/// Write the per-language files back into each component's own storage.
pub fn import(ctx: &SyncContext) -> Result<CommandResult> {
    let scan = read_language_sources(ctx).context("Import aborted")?;
    let by_language = LanguageIndexed::from_entries(scan.entries);
    let store = by_language.distribute();

    let mut written_files = Vec::new();
    let mut skipped_components = Vec::new();
    for outcome in write_components(ctx, &store)? {
        match outcome {
            WriteOutcome::Written(component) => written_files.push(component),
            WriteOutcome::Skipped(component) => skipped_components.push(component),
        }
    }

    let mut warnings = scan.warnings;
    warnings.extend(skipped_components.iter().map(|component| {
        format!(
            "Skipping {}: not a .vue file or *.lang.<ext> file",
            component
        )
    }));

    Ok(CommandResult::new(
        CommandSummary::Import(ImportSummary {
            source_files: scan.files,
            written_files,
            skipped_components,
            language_count: by_language.len(),
        }),
        warnings,
    ))
}
