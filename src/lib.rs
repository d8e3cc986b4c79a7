//! vue-i18n-sync - keep Vue single-file component translations in sync
//!
//! Vue projects often keep translations next to the code that uses them, in
//! `<i18n>` blocks or `*.lang.yml` files. Translators prefer one file per
//! language. This crate moves translations between the two layouts and checks
//! that every component is translated into every language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (export, import, check, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Sync engine (sources, stores, consistency check, writers)
//! - `error`: Error type for source and destination failures

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
