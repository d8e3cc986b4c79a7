//! Sync engine: reads translation sources, reshapes them between the
//! component-indexed and language-indexed views, checks consistency and
//! writes the result back.
//!
//! Nothing in here prints; reporting belongs to the CLI layer.

pub mod consistency;
pub mod context;
pub mod file_scanner;
pub mod parsers;
pub mod sources;
pub mod store;
pub mod writer;

pub use consistency::{ConsistencyReport, Rule, Violation, check};
pub use context::SyncContext;
pub use sources::{SourceScan, read_component_sources, read_language_sources};
pub use store::{
    ComponentIndexed, Document, LanguageIndexed, Origin, SourceEntry, TranslationUnit,
};
pub use writer::{WriteOutcome, write_components, write_language_files};
