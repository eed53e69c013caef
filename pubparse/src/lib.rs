//! pubparse library interface
//!
//! Converts PubMed and PMC XML documents into schema-validated JSON with a
//! bounded-concurrency batch runner. Exposed as a library for the binary and
//! for integration testing.

pub mod app;
pub mod error;
pub mod models;
pub mod services;
pub mod xml;

pub use crate::error::{BatchError, ConvertError, ItemError, Stage, Violation};
pub use crate::models::{ArticleFamily, ParsedArticle};

/// Directory holding the bundled JSON schemas
pub fn bundled_schema_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("schemas")
}
