//! JSON rendering and schema validation
//!
//! A document is rendered, written to its output location, read back from
//! disk and validated there, so the validated bytes are exactly the bytes a
//! consumer will read.

use crate::error::{ConvertError, SchemaError, Violation};
use crate::models::{ArticleFamily, ParsedArticle};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Compiled schemas for both article families
///
/// Loaded once per run and shared read-only by all workers.
pub struct SchemaSet {
    dir: PathBuf,
    pubmed: JSONSchema,
    pmc: JSONSchema,
}

impl std::fmt::Debug for SchemaSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaSet").field("dir", &self.dir).finish()
    }
}

impl SchemaSet {
    /// Load and compile `pubmed_json_schema.json` and `pmc_json_schema.json`
    pub fn load(dir: &Path) -> Result<Self, SchemaError> {
        let pubmed = compile(&schema_path(dir, ArticleFamily::Pubmed))?;
        let pmc = compile(&schema_path(dir, ArticleFamily::Pmc))?;
        info!("Schemas loaded from {}", dir.display());
        Ok(Self {
            dir: dir.to_path_buf(),
            pubmed,
            pmc,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn schema(&self, family: ArticleFamily) -> &JSONSchema {
        match family {
            ArticleFamily::Pubmed => &self.pubmed,
            ArticleFamily::Pmc => &self.pmc,
        }
    }

    /// Validate a JSON document against the family's schema
    pub fn validate(&self, family: ArticleFamily, instance: &Value) -> Result<(), Vec<Violation>> {
        self.schema(family).validate(instance).map_err(|errors| {
            errors
                .map(|e| Violation {
                    path: e.instance_path.to_string(),
                    message: e.to_string(),
                })
                .collect()
        })
    }
}

/// Location of a family's schema file inside `dir`
pub fn schema_path(dir: &Path, family: ArticleFamily) -> PathBuf {
    dir.join(format!("{}_json_schema.json", family.schema_name()))
}

fn compile(path: &Path) -> Result<JSONSchema, SchemaError> {
    if !path.is_file() {
        return Err(SchemaError::Missing(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let schema: Value = serde_json::from_str(&raw).map_err(|source| SchemaError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    JSONSchema::compile(&schema).map_err(|e| SchemaError::Compile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Render `article` to `output` and validate the written file
///
/// Render, write and read-back failures are fatal to the batch; a
/// [`ConvertError::Validation`] only fails this document.
pub fn serialize_and_validate(
    article: &ParsedArticle,
    output: &Path,
    schemas: &SchemaSet,
) -> Result<(), ConvertError> {
    let rendered = serde_json::to_string_pretty(article).map_err(ConvertError::Render)?;
    std::fs::write(output, rendered.as_bytes()).map_err(ConvertError::Write)?;
    debug!(output = %output.display(), bytes = rendered.len(), "JSON written");

    let written = std::fs::read_to_string(output)
        .map_err(|e| ConvertError::ReadBack(format!("{}: {}", output.display(), e)))?;
    let document: Value = serde_json::from_str(&written)
        .map_err(|e| ConvertError::ReadBack(format!("{}: {}", output.display(), e)))?;

    schemas
        .validate(article.family(), &document)
        .map_err(ConvertError::Validation)
}
