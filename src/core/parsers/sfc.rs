//! Vue single-file component block scanner.
//!
//! Finds the top-level blocks of a `.vue` file (`<template>`, `<script>`,
//! `<style>`, and custom blocks such as `<i18n>`) and reports the byte range
//! of each block's content. Only `<template>` may nest its own tag; every
//! other block is raw text that ends at the first matching close tag.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::payload::Format;

static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([A-Za-z][A-Za-z0-9-]*)(\s[^>]*)?>").expect("open tag regex is valid")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("attribute regex is valid")
});

pub const I18N_TAG: &str = "i18n";

/// A top-level block of a single-file component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfcBlock {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    /// Byte offset of the first content byte, right after the open tag.
    pub start: usize,
    /// Byte offset of the close tag.
    pub end: usize,
}

impl SfcBlock {
    pub fn content<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn is_i18n(&self) -> bool {
        self.tag == I18N_TAG
    }

    /// Whether the block's messages live in another file (`src="..."`).
    pub fn is_external(&self) -> bool {
        self.attrs.contains_key("src")
    }

    /// Language of a block holding a single language (`locale="en"`).
    pub fn locale(&self) -> Option<&str> {
        self.attr("locale").filter(|l| !l.is_empty())
    }

    pub fn format(&self) -> Format {
        Format::from_block_lang(self.attr("lang"))
    }
}

/// `<i18n>` blocks with inline content, in document order.
pub fn i18n_blocks(source: &str) -> Vec<SfcBlock> {
    parse_blocks(source)
        .into_iter()
        .filter(|block| block.is_i18n() && !block.is_external())
        .collect()
}

/// Scan all top-level blocks of `source`, in document order.
///
/// Self-closing blocks have no content and are skipped. Scanning stops at a
/// block with no close tag.
pub fn parse_blocks(source: &str) -> Vec<SfcBlock> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(offset) = source[pos..].find('<') {
        let at = pos + offset;
        let rest = &source[at..];

        if rest.starts_with("<!--") {
            pos = match rest.find("-->") {
                Some(end) => at + end + 3,
                None => break,
            };
            continue;
        }

        let Some(caps) = OPEN_TAG.captures(rest) else {
            pos = at + 1;
            continue;
        };

        let open_end = at + caps.get(0).map_or(0, |m| m.end());
        let tag = caps.get(1).map_or("", |m| m.as_str());
        let raw_attrs = caps.get(2).map_or("", |m| m.as_str());

        if raw_attrs.trim_end().ends_with('/') {
            pos = open_end;
            continue;
        }

        let Some((close_start, close_end)) = find_close_tag(source, open_end, tag) else {
            break;
        };

        blocks.push(SfcBlock {
            tag: tag.to_string(),
            attrs: parse_attrs(raw_attrs),
            start: open_end,
            end: close_start,
        });
        pos = close_end;
    }

    blocks
}

fn parse_attrs(raw: &str) -> BTreeMap<String, String> {
    ATTRIBUTE
        .captures_iter(raw)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_string();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or(String::new(), |m| m.as_str().to_string());
            Some((name, value))
        })
        .collect()
}

/// Find `needle` at or after `from` where it is followed by a tag-name
/// boundary (whitespace, `>` or `/`).
fn find_tag(source: &str, from: usize, needle: &str) -> Option<usize> {
    let mut pos = from;
    while let Some(offset) = source[pos..].find(needle) {
        let at = pos + offset;
        let after = at + needle.len();
        match source[after..].chars().next() {
            Some(c) if c == '>' || c == '/' || c.is_whitespace() => return Some(at),
            _ => pos = after,
        }
    }
    None
}

/// Locate the close tag of a block opened right before `from`.
///
/// Returns the byte range of the close tag itself.
fn find_close_tag(source: &str, from: usize, tag: &str) -> Option<(usize, usize)> {
    let open = format!("<{}", tag);
    let close = format!("</{}", tag);
    let nests = tag == "template";
    let mut depth = 0usize;
    let mut pos = from;

    loop {
        let close_at = find_tag(source, pos, &close)?;

        if nests
            && let Some(open_at) = find_tag(source, pos, &open).filter(|&at| at < close_at)
        {
            let open_end = open_at + source[open_at..].find('>')? + 1;
            if !source[open_at..open_end].trim_end_matches('>').ends_with('/') {
                depth += 1;
            }
            pos = open_end;
            continue;
        }

        let close_end = close_at + source[close_at..].find('>')? + 1;
        if depth == 0 {
            return Some((close_at, close_end));
        }
        depth -= 1;
        pos = close_end;
    }
}
