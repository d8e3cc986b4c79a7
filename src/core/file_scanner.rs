use std::{
    collections::BTreeSet,
    path::{Component, Path},
};

use glob::{Pattern, glob};

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matched files as root-relative component ids, sorted.
    pub files: Vec<String>,
    /// Problems that did not stop the scan (invalid patterns, unreadable paths).
    pub warnings: Vec<String>,
}

/// Root-relative id of a path, with `/` separators on every platform.
pub fn component_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Expand `patterns` under `root`, dropping anything matched by `ignores`.
///
/// Ignore patterns are matched against the root-relative id.
pub fn scan_files(root: &Path, patterns: &[String], ignores: &[Pattern]) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut warnings = Vec::new();

    let escaped_root = Pattern::escape(&root.to_string_lossy());

    for pattern in patterns {
        let full_pattern = format!("{}/{}", escaped_root.trim_end_matches('/'), pattern);
        let entries = match glob(&full_pattern) {
            Ok(entries) => entries,
            Err(e) => {
                warnings.push(format!("Invalid glob pattern '{}': {}", pattern, e));
                continue;
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warnings.push(format!("Cannot access path: {}", e));
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }

            let id = component_id(root, &path);
            if ignores.iter().any(|p| p.matches(&id)) {
                continue;
            }
            files.insert(id);
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        warnings,
    }
}
