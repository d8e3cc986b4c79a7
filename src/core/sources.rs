//! Source adapter: discovers translation sources and reads them into
//! [`SourceEntry`] values.
//!
//! Files are read in parallel, but entries come back in a fixed order so that
//! last-write-wins aggregation is reproducible:
//!
//! 1. component files (`components` patterns), sorted by path, then
//! 2. per-component files (`langFiles` patterns), sorted by path.
//!
//! Within a component file, `<i18n>` blocks are read in document order.

use std::{fs, path::Path};

use glob::Pattern;
use rayon::prelude::*;

use super::{
    context::SyncContext,
    file_scanner::{ScanResult, scan_files},
    parsers::{
        payload::{Format, parse_document, parse_unit},
        sfc::i18n_blocks,
    },
    store::{Origin, SourceEntry},
};
use crate::error::{SyncError, SyncResult};

/// Entries read from a set of files, plus what was scanned.
#[derive(Debug, Default)]
pub struct SourceScan {
    pub entries: Vec<SourceEntry>,
    /// Files read, in read order.
    pub files: Vec<String>,
    pub warnings: Vec<String>,
}

fn read_file(path: &Path) -> SyncResult<String> {
    fs::read_to_string(path).map_err(|source| SyncError::SourceRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Entries from every inline `<i18n>` block of a component file.
///
/// A block with a `locale` attribute holds that single language; any other
/// block maps languages to messages.
pub fn read_embedded(ctx: &SyncContext, component: &str) -> SyncResult<Vec<SourceEntry>> {
    let path = ctx.resolve(component);
    let source = read_file(&path)?;
    let parse_error = |source| SyncError::SourceParse {
        path: path.clone(),
        source,
    };

    let mut entries = Vec::new();
    for block in i18n_blocks(&source) {
        let content = block.content(&source);
        match block.locale() {
            Some(language) => {
                let unit = parse_unit(content, block.format()).map_err(parse_error)?;
                entries.push(SourceEntry::new(component, language, unit));
            }
            None => {
                let document = parse_document(content, block.format()).map_err(parse_error)?;
                entries.extend(document.into_iter().map(|(language, unit)| {
                    SourceEntry::new(component, language, unit)
                }));
            }
        }
    }
    Ok(entries)
}

/// Entries from a per-component translation file.
pub fn read_standalone(ctx: &SyncContext, component: &str) -> SyncResult<Vec<SourceEntry>> {
    let path = ctx.resolve(component);
    let format =
        Format::from_path(&path).ok_or_else(|| SyncError::UnsupportedFormat { path: path.clone() })?;
    let content = read_file(&path)?;
    let document = parse_document(&content, format).map_err(|source| SyncError::SourceParse {
        path: path.clone(),
        source,
    })?;

    Ok(document
        .into_iter()
        .map(|(language, unit)| SourceEntry::new(component, language, unit))
        .collect())
}

/// Entries from a per-language aggregate file: one entry per component.
pub fn read_aggregate(
    ctx: &SyncContext,
    file: &str,
    language: &str,
) -> SyncResult<Vec<SourceEntry>> {
    let path = ctx.resolve(file);
    let format =
        Format::from_path(&path).ok_or_else(|| SyncError::UnsupportedFormat { path: path.clone() })?;
    let content = read_file(&path)?;
    let document = parse_document(&content, format).map_err(|source| SyncError::SourceParse {
        path: path.clone(),
        source,
    })?;

    Ok(document
        .into_iter()
        .map(|(component, unit)| SourceEntry::new(component, language, unit))
        .collect())
}

fn collect_warnings(scans: &[&ScanResult]) -> Vec<String> {
    scans
        .iter()
        .flat_map(|scan| scan.warnings.iter().cloned())
        .collect()
}

/// Read every component file and per-component translation file.
///
/// Any read or parse failure aborts the whole scan.
pub fn read_component_sources(ctx: &SyncContext) -> SyncResult<SourceScan> {
    let components = scan_files(&ctx.root, &ctx.config.components, &ctx.ignores);
    let lang_files = scan_files(&ctx.root, &ctx.config.lang_files, &ctx.ignores);

    let files: Vec<(&String, Origin)> = components
        .files
        .iter()
        .map(|f| (f, Origin::Embedded))
        .chain(lang_files.files.iter().map(|f| (f, Origin::Standalone)))
        .collect();

    let per_file = files
        .par_iter()
        .map(|(file, origin)| match origin {
            Origin::Embedded => read_embedded(ctx, file),
            Origin::Standalone => read_standalone(ctx, file),
        })
        .collect::<SyncResult<Vec<_>>>()?;

    Ok(SourceScan {
        entries: per_file.into_iter().flatten().collect(),
        files: files.into_iter().map(|(f, _)| f.clone()).collect(),
        warnings: collect_warnings(&[&components, &lang_files]),
    })
}

/// Read every per-language aggregate file in the translations directory.
///
/// Files whose name does not carry a language segment are skipped with a
/// warning.
pub fn read_language_sources(ctx: &SyncContext) -> SyncResult<SourceScan> {
    let patterns: Vec<String> = ["yml", "yaml", "json"]
        .iter()
        .map(|ext| {
            format!(
                "{}/{}.*.{}",
                Pattern::escape(&ctx.config.translations_dir),
                Pattern::escape(&ctx.config.translations_prefix),
                ext
            )
        })
        .collect();
    let scan = scan_files(&ctx.root, &patterns, &[]);
    let mut warnings = scan.warnings.clone();

    let files: Vec<(&String, String)> = scan
        .files
        .iter()
        .filter_map(|file| {
            let file_name = file.rsplit('/').next().unwrap_or(file);
            match ctx.config.language_of_translation_file(file_name) {
                Some(language) => Some((file, language)),
                None => {
                    warnings.push(format!("Skipping {}: no language in file name", file));
                    None
                }
            }
        })
        .collect();

    let per_file = files
        .par_iter()
        .map(|(file, language)| read_aggregate(ctx, file, language))
        .collect::<SyncResult<Vec<_>>>()?;

    Ok(SourceScan {
        entries: per_file.into_iter().flatten().collect(),
        files: files.into_iter().map(|(f, _)| f.clone()).collect(),
        warnings,
    })
}
