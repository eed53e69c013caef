//! Run wiring: paths, schemas, report and batch runner
//!
//! Everything that can be rejected before a single document is converted is
//! checked here first (input discovery, output preparation, schema loading,
//! report creation). Only then is the batch started.

use crate::error::BatchError;
use crate::models::{ArticleFamily, BatchSummary};
use crate::services::batch_orchestrator::{work_items, BatchConfig, BatchOrchestrator};
use crate::services::paths::{
    absolutize, default_output_dir, ensure_dir, output_paths, prepare_outputs, resolve_inputs,
};
use crate::services::report_log::{ReportLog, SessionHeader};
use crate::services::serializer::SchemaSet;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub declared: ArticleFamily,
    pub input: PathBuf,
    /// Output directory; derived from the input when absent
    pub output: Option<PathBuf>,
    pub workers: usize,
    pub schema_dir: PathBuf,
    pub report_name: String,
    pub progress_interval: Duration,
    pub show_progress: bool,
}

/// What a run did, including a batch-level failure
#[derive(Debug)]
pub struct RunOutcome {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub report_path: PathBuf,
    pub result: std::result::Result<BatchSummary, BatchError>,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Prepare and execute one batch
///
/// Returns `Err` only for failures before the batch starts. Per-item and
/// fatal batch failures are reported in [`RunOutcome::result`].
pub async fn run(options: RunOptions) -> Result<RunOutcome> {
    let inputs = resolve_inputs(&options.input).context("Cannot resolve input files")?;

    let output_dir = match &options.output {
        Some(dir) => absolutize(dir)?,
        None => default_output_dir(&inputs.path, inputs.is_dir)?,
    };
    ensure_dir(&output_dir).context("Cannot create output directory")?;

    let outputs = output_paths(&inputs.files, &inputs.root, &output_dir)?;
    prepare_outputs(&outputs).context("Cannot prepare output files")?;

    let schemas = SchemaSet::load(&options.schema_dir).context("Cannot load JSON schemas")?;

    let report_path = output_dir.join(&options.report_name);
    let report = ReportLog::open_append(&report_path)
        .await
        .with_context(|| format!("Cannot open report {}", report_path.display()))?;

    let header = SessionHeader {
        started: chrono::Local::now(),
        input: inputs.path.clone(),
        output: output_dir.clone(),
        inputs: inputs.files.len(),
        workers: options.workers,
    };
    report
        .write_header(&header)
        .await
        .context("Cannot write report header")?;

    info!(
        mode = %options.declared,
        input = %inputs.path.display(),
        output = %output_dir.display(),
        count = inputs.files.len(),
        workers = options.workers,
        "Conversion starting"
    );

    let config = BatchConfig {
        workers: options.workers,
        progress_interval: options.progress_interval,
        show_progress: options.show_progress,
        declared: Some(options.declared),
    };
    let items = work_items(&inputs.files, &outputs)?;
    let mut orchestrator = BatchOrchestrator::new(config, Arc::new(schemas), Arc::new(report))?;
    let result = orchestrator.run(items).await;

    Ok(RunOutcome {
        input: inputs.path,
        output_dir,
        report_path,
        result,
    })
}
