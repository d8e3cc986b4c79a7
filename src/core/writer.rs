//! Writer adapter: persists stores back to disk.
//!
//! - Aggregate files are overwritten whole, one per language.
//! - Component files get their `<i18n>` block content replaced in place;
//!   everything outside the blocks is kept byte for byte.
//! - Per-component translation files are overwritten whole.
//!
//! Writing happens in two phases. Every destination is first read and
//! rendered; only when all of them succeed are the files written, in
//! parallel. A failed write does not roll back earlier ones.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use rayon::prelude::*;

use super::{
    context::SyncContext,
    parsers::{
        payload::{Format, parse_document, render_document, render_unit},
        sfc::{SfcBlock, i18n_blocks},
    },
    store::{ComponentIndexed, Document, LanguageIndexed},
};
use crate::error::{SyncError, SyncResult};

/// How a component stores its translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// `<i18n>` blocks inside a `.vue` file.
    Embedded,
    /// A `*.lang.<ext>` file.
    Standalone(Format),
}

impl Destination {
    /// Route a component id by its file name.
    pub fn classify(component: &str) -> Option<Self> {
        let file_name = component.rsplit('/').next().unwrap_or(component);
        if file_name.ends_with(".vue") {
            return Some(Destination::Embedded);
        }
        let (stem, extension) = file_name.rsplit_once('.')?;
        if !stem.ends_with(".lang") {
            return None;
        }
        Format::from_extension(extension).map(Destination::Standalone)
    }
}

/// Outcome of writing one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(String),
    /// The component id names no storage this tool can write to.
    Skipped(String),
}

/// Rendered file content waiting to be written.
#[derive(Debug)]
struct PendingWrite {
    path: PathBuf,
    content: String,
}

/// Replace `content[start..end]` with `payload`, keeping the rest verbatim.
pub fn replace_region(content: &str, start: usize, end: usize, payload: &str) -> String {
    let mut out = String::with_capacity(content.len() - (end - start) + payload.len());
    out.push_str(&content[..start]);
    out.push_str(payload);
    out.push_str(&content[end..]);
    out
}

fn write_file(path: &Path, content: &str) -> SyncResult<()> {
    let write_error = |source| SyncError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)
}

fn write_pending<'a, I>(pending: I) -> SyncResult<()>
where
    I: IntoParallelIterator<Item = &'a PendingWrite>,
{
    pending
        .into_par_iter()
        .try_for_each(|write| write_file(&write.path, &write.content))
}

/// Reject component ids that would resolve outside the project root.
fn check_component_path(component: &str) -> SyncResult<()> {
    let path = Path::new(component);
    let escapes = path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if escapes || component.is_empty() {
        return Err(SyncError::InvalidComponent {
            component: component.to_string(),
        });
    }
    Ok(())
}

/// Reject language codes that cannot be used as a file name segment.
fn check_language(language: &str) -> SyncResult<()> {
    if language.is_empty() || language.contains(['/', '\\']) || language.contains("..") {
        return Err(SyncError::InvalidLanguage {
            language: language.to_string(),
        });
    }
    Ok(())
}

fn block_payload(payload: &str) -> String {
    format!("\n{}", payload)
}

/// Whether `block` currently supplies messages for `language`.
fn holds(block: &SfcBlock, shared: &Document, language: &str) -> bool {
    match block.locale() {
        Some(locale) => locale == language,
        None => shared.contains_key(language),
    }
}

/// Rewrite the `<i18n>` blocks of a component's source.
///
/// Blocks are read in document order and a later block overrides an earlier
/// one, so each language goes into the last block that holds it now and is
/// removed from the blocks before it. Languages no block holds go into the
/// first block without a `locale` attribute, or into a new block appended to
/// the file when there is none. Blocks that hold none of `languages` are left
/// as they are. Each block keeps its own format.
pub fn render_component_source(
    source: &str,
    path: &Path,
    languages: &Document,
) -> SyncResult<String> {
    let render_error = |source| SyncError::Render {
        path: path.to_path_buf(),
        source,
    };
    let blocks = i18n_blocks(source);
    let held = blocks
        .iter()
        .map(|block| match block.locale() {
            Some(_) => Ok(Document::new()),
            None => parse_document(block.content(source), block.format()),
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| SyncError::SourceParse {
            path: path.to_path_buf(),
            source,
        })?;

    let first_shared = blocks.iter().position(|block| block.locale().is_none());
    let target = |language: &str| {
        (0..blocks.len())
            .rev()
            .find(|&i| holds(&blocks[i], &held[i], language))
            .or(first_shared)
    };

    let mut edits: Vec<(usize, usize, String)> = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        match block.locale() {
            Some(locale) => {
                let Some(unit) = languages.get(locale) else {
                    continue;
                };
                let payload = if target(locale) == Some(i) {
                    block_payload(&render_unit(unit, block.format()).map_err(render_error)?)
                } else {
                    "\n".to_string()
                };
                edits.push((block.start, block.end, payload));
            }
            None => {
                let touched = held[i].keys().any(|l| languages.contains_key(l))
                    || languages.keys().any(|l| target(l) == Some(i));
                if !touched {
                    continue;
                }
                let document: Document = held[i]
                    .iter()
                    .filter(|(language, _)| !languages.contains_key(*language))
                    .chain(languages.iter().filter(|(language, _)| target(language) == Some(i)))
                    .map(|(language, unit)| (language.clone(), unit.clone()))
                    .collect();
                let payload = if document.is_empty() {
                    "\n".to_string()
                } else {
                    block_payload(&render_document(&document, block.format()).map_err(render_error)?)
                };
                edits.push((block.start, block.end, payload));
            }
        }
    }

    let unplaced: Document = languages
        .iter()
        .filter(|(language, _)| target(language).is_none())
        .map(|(language, unit)| (language.clone(), unit.clone()))
        .collect();

    // Apply back to front so earlier offsets stay valid.
    edits.sort_by(|a, b| b.0.cmp(&a.0));
    let mut out = edits
        .iter()
        .fold(source.to_string(), |content, (start, end, payload)| {
            replace_region(&content, *start, *end, payload)
        });

    if !unplaced.is_empty() {
        let payload = render_document(&unplaced, Format::Yaml).map_err(render_error)?;
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&format!("\n<i18n>\n{}</i18n>\n", payload));
    }
    Ok(out)
}

/// Render a component file's new content, or `None` when nothing changes.
fn render_embedded(path: &Path, languages: &Document) -> SyncResult<Option<String>> {
    let source = fs::read_to_string(path).map_err(|source| SyncError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    let updated = render_component_source(&source, path, languages)?;
    Ok((updated != source).then_some(updated))
}

/// Write one aggregate file per language. Returns the files written, as
/// root-relative paths.
///
/// Nothing is written unless every language renders.
pub fn write_language_files(ctx: &SyncContext, store: &LanguageIndexed) -> SyncResult<Vec<String>> {
    let languages: Vec<(&str, &Document)> = store.languages().collect();

    let pending = languages
        .par_iter()
        .map(|(language, components)| -> SyncResult<(String, PendingWrite)> {
            check_language(language)?;
            let file = format!(
                "{}/{}",
                ctx.config.translations_dir.trim_end_matches('/'),
                ctx.config.translation_file_name(language)
            );
            let path = ctx.resolve(&file);
            let content =
                render_document(components, ctx.config.format).map_err(|source| {
                    SyncError::Render {
                        path: path.clone(),
                        source,
                    }
                })?;
            Ok((file, PendingWrite { path, content }))
        })
        .collect::<SyncResult<Vec<_>>>()?;

    write_pending(pending.par_iter().map(|(_, write)| write))?;
    Ok(pending.into_iter().map(|(file, _)| file).collect())
}

/// Write every component's translations back to where it keeps them.
///
/// Components whose id is neither a `.vue` file nor a `*.lang.<ext>` file
/// are skipped. Every component file is read and rendered before the first
/// write, so a missing or broken one leaves all destinations untouched.
pub fn write_components(ctx: &SyncContext, store: &ComponentIndexed) -> SyncResult<Vec<WriteOutcome>> {
    let components: Vec<(&str, &Document)> = store.components().collect();

    let planned = components
        .par_iter()
        .map(|(component, languages)| -> SyncResult<(WriteOutcome, Option<PendingWrite>)> {
            let Some(destination) = Destination::classify(component) else {
                return Ok((WriteOutcome::Skipped(component.to_string()), None));
            };
            check_component_path(component)?;
            let path = ctx.resolve(component);
            let content = match destination {
                Destination::Embedded => render_embedded(&path, languages)?,
                Destination::Standalone(format) => Some(
                    render_document(languages, format).map_err(|source| SyncError::Render {
                        path: path.clone(),
                        source,
                    })?,
                ),
            };
            let pending = content.map(|content| PendingWrite { path, content });
            Ok((WriteOutcome::Written(component.to_string()), pending))
        })
        .collect::<SyncResult<Vec<_>>>()?;

    write_pending(planned.par_iter().filter_map(|(_, pending)| pending.as_ref()))?;
    Ok(planned.into_iter().map(|(outcome, _)| outcome).collect())
}
