//! Test Helper Utilities
//!
//! Shared fixtures and assertions for pubparse integration tests

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{
    FOREIGN_XML, PMC_NO_BACK, PUBMED_BOOK, PUBMED_WITH_KEYWORDS, PUBMED_WITH_UNKNOWN,
};

use pubparse::services::SchemaSet;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Compile the bundled schemas
pub fn bundled_schemas() -> Arc<SchemaSet> {
    Arc::new(SchemaSet::load(&pubparse::bundled_schema_dir()).unwrap())
}

/// Write `(relative name, content)` pairs under `dir`, returning their paths
pub fn write_inputs(dir: &Path, files: &[(&str, &str)]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&path, content).unwrap();
            path
        })
        .collect()
}

/// JSON pointers of every `null` in a document
pub fn null_paths(value: &Value) -> Vec<String> {
    fn walk(value: &Value, path: String, found: &mut Vec<String>) {
        match value {
            Value::Null => found.push(path),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    walk(item, format!("{}/{}", path, i), found);
                }
            }
            Value::Object(map) => {
                for (key, item) in map {
                    walk(item, format!("{}/{}", path, key), found);
                }
            }
            _ => {}
        }
    }

    let mut found = Vec::new();
    walk(value, String::new(), &mut found);
    found
}

/// Read and parse a JSON output file
pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
