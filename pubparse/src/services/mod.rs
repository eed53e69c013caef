//! Conversion pipeline services
//!
//! - `discriminator`: bytes → `ParsedArticle`
//! - `normalizer`: absent collections → explicit empty collections
//! - `serializer`: render, write, read back, validate
//! - `converter`: one file through all stages
//! - `batch_orchestrator`: bounded-concurrency runner over many files
//! - `report_log`, `progress`: resources shared by the runner's workers
//! - `paths`: input discovery and output location derivation

pub mod batch_orchestrator;
pub mod converter;
pub mod discriminator;
pub mod normalizer;
pub mod paths;
pub mod progress;
pub mod report_log;
pub mod serializer;

pub use batch_orchestrator::{BatchConfig, BatchOrchestrator};
pub use converter::convert_file;
pub use discriminator::discriminate;
pub use normalizer::{normalize, Normalize};
pub use progress::{ProgressCounter, ProgressReporter};
pub use report_log::ReportLog;
pub use serializer::{serialize_and_validate, SchemaSet};
