//! Error types for pubparse
//!
//! Per-document failures are `ConvertError`s wrapped in an `ItemError` that
//! records which input failed and at which stage. `is_fatal()` separates
//! failures local to one document from I/O failures that stop the batch.

use crate::models::BatchSummary;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// One JSON Schema violation in a rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer to the offending instance (empty for the document root)
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "/: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure of a single conversion step
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input could not be read
    #[error("Cannot read input: {0}")]
    Read(#[source] std::io::Error),

    /// No known document shape accepted the input
    #[error("Unrecognized document structure ({})", .0.join("; "))]
    Unrecognized(Vec<String>),

    /// Article tree could not be rendered as JSON
    #[error("Cannot render JSON: {0}")]
    Render(#[source] serde_json::Error),

    /// Rendered JSON could not be written to the output location
    #[error("Cannot write output: {0}")]
    Write(#[source] std::io::Error),

    /// Written output could not be read back for validation
    #[error("Cannot read back output: {0}")]
    ReadBack(String),

    /// Output does not conform to its schema
    #[error("Schema validation failed with {} violation(s): {}", .0.len(), join_violations(.0))]
    Validation(Vec<Violation>),

    /// Report line could not be appended
    #[error("Cannot append to report: {0}")]
    ReportAppend(#[source] std::io::Error),

    /// Worker task panicked or was cancelled
    #[error("Worker failed: {0}")]
    Worker(String),
}

impl ConvertError {
    /// Fatal errors stop the batch; the rest only fail their own document
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ConvertError::Render(_)
                | ConvertError::Write(_)
                | ConvertError::ReadBack(_)
                | ConvertError::ReportAppend(_)
                | ConvertError::Worker(_)
        )
    }

    /// Violations carried by a validation failure
    pub fn violations(&self) -> &[Violation] {
        match self {
            ConvertError::Validation(v) => v,
            _ => &[],
        }
    }
}

/// Pipeline stage at which an item failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Read,
    Parse,
    Serialize,
    Validate,
    Report,
    Worker,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read => "read",
            Stage::Parse => "parse",
            Stage::Serialize => "serialize",
            Stage::Validate => "validate",
            Stage::Report => "report",
            Stage::Worker => "worker",
        };
        f.write_str(name)
    }
}

/// Failure of one work item, tagged with its paths and stage
#[derive(Debug, Clone, Error)]
#[error("{} [{stage}]: {source}", .input.display())]
pub struct ItemError {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stage: Stage,
    #[source]
    pub source: Arc<ConvertError>,
}

impl ItemError {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        stage: Stage,
        source: ConvertError,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            stage,
            source: Arc::new(source),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.source.is_fatal()
    }
}

/// Schema loading errors
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema file not found: {0}")]
    Missing(PathBuf),

    #[error("Cannot read schema {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema {path} failed to compile: {message}")]
    Compile { path: PathBuf, message: String },
}

/// Input/output path handling errors
#[derive(Debug, Error)]
pub enum PathError {
    #[error("{path} is not under input root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    #[error("No .xml files found under {0}")]
    NoInputs(PathBuf),

    #[error("Cannot derive output location from {0}")]
    NoParent(PathBuf),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Batch-level outcome errors
#[derive(Debug, Error)]
pub enum BatchError {
    /// Rejected before any item ran
    #[error("Configuration error: {0}")]
    Config(String),

    /// Every item ran; at least one failed
    #[error("{} of {} item(s) failed; first error: {first}", .summary.failed, .summary.total)]
    ItemsFailed {
        first: ItemError,
        summary: BatchSummary,
    },

    /// A fatal error stopped the batch early
    #[error("Batch aborted: {error}")]
    Fatal {
        error: ItemError,
        summary: BatchSummary,
    },
}

impl BatchError {
    /// Summary of the items that did run, if any ran
    pub fn summary(&self) -> Option<&BatchSummary> {
        match self {
            BatchError::Config(_) => None,
            BatchError::ItemsFailed { summary, .. } | BatchError::Fatal { summary, .. } => {
                Some(summary)
            }
        }
    }

    /// The per-item error that is reported to the caller
    pub fn item_error(&self) -> Option<&ItemError> {
        match self {
            BatchError::Config(_) => None,
            BatchError::ItemsFailed { first, .. } => Some(first),
            BatchError::Fatal { error, .. } => Some(error),
        }
    }
}

impl From<pubparse_common::Error> for BatchError {
    fn from(err: pubparse_common::Error) -> Self {
        BatchError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        let io = || std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert!(ConvertError::Write(io()).is_fatal());
        assert!(ConvertError::ReportAppend(io()).is_fatal());
        assert!(ConvertError::ReadBack("truncated".into()).is_fatal());
        assert!(!ConvertError::Read(io()).is_fatal());
        assert!(!ConvertError::Unrecognized(vec!["no match".into()]).is_fatal());
        assert!(!ConvertError::Validation(vec![]).is_fatal());
    }

    #[test]
    fn test_item_error_display_names_input_and_stage() {
        let err = ItemError::new(
            "/in/a.xml",
            "/out/a.json",
            Stage::Parse,
            ConvertError::Unrecognized(vec!["GenericArticleSet: no PubmedArticle".into()]),
        );
        let text = err.to_string();
        assert!(text.contains("/in/a.xml"));
        assert!(text.contains("[parse]"));
        assert!(text.contains("no PubmedArticle"));
    }

    #[test]
    fn test_validation_message_lists_violations() {
        let err = ConvertError::Validation(vec![
            Violation {
                path: "/PubmedArticles/0".into(),
                message: "\"PubmedData\" is a required property".into(),
            },
            Violation {
                path: String::new(),
                message: "bad root".into(),
            },
        ]);
        let text = err.to_string();
        assert!(text.contains("2 violation(s)"));
        assert!(text.contains("/PubmedArticles/0"));
        assert!(text.contains("/: bad root"));
        assert_eq!(err.violations().len(), 2);
    }
}
