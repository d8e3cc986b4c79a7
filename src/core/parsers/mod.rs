//! Parsers for component sources and translation payloads.
//!
//! - `sfc`: locates top-level blocks in Vue single-file components
//! - `payload`: reads and writes YAML/JSON translation documents

pub mod payload;
pub mod sfc;
