//! Errors raised while reading or writing translation sources.
//!
//! Consistency problems are not errors; they are reported as
//! [`Violation`](crate::core::Violation)s by the check.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::parsers::payload::PayloadError;

#[derive(Debug, Error)]
pub enum SyncError {
    /// A source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A source file was read but its translations could not be parsed.
    #[error("Failed to parse {}: {source}", path.display())]
    SourceParse {
        path: PathBuf,
        #[source]
        source: PayloadError,
    },

    /// A source file has an extension with no known payload format.
    #[error("Unsupported translation file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Translations could not be serialized for a destination.
    #[error("Failed to serialize translations for {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: PayloadError,
    },

    /// A destination could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A component id from a translation file points outside the project.
    #[error("Component path escapes the project root: {component}")]
    InvalidComponent { component: String },

    /// A language code cannot be used in an aggregate file name.
    #[error("Invalid language code: \"{language}\"")]
    InvalidLanguage { language: String },
}

pub type SyncResult<T> = Result<T, SyncError>;
