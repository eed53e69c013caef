//! Bounded-concurrency batch conversion
//!
//! A fixed pool of `min(workers, items)` tasks pulls items from a shared,
//! pre-built list through an atomic cursor. The pool size is what bounds
//! concurrency. Each task also takes a permit from a `workers`-permit
//! semaphore before starting an item; the permits never run out, so the
//! semaphore acts only as a stop gate. Closing it is how a fatal error stops
//! new items from starting while in-flight ones finish.
//!
//! Per-item failures never abort the batch. Every item runs, and the first
//! failure in completion order is returned once the pool has drained.

use super::converter::convert_file;
use super::progress::{ProgressCounter, ProgressReporter};
use super::report_log::ReportLog;
use super::serializer::SchemaSet;
use crate::error::{BatchError, ConvertError, ItemError, Stage};
use crate::models::{ArticleFamily, BatchState, BatchSummary, ConversionResult, WorkItem};
use pubparse_common::config::DEFAULT_PROGRESS_INTERVAL_MS;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Batch runner settings
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Maximum number of items processed at once
    pub workers: usize,
    /// Interval between progress renders
    pub progress_interval: Duration,
    /// Render the terminal progress bar
    pub show_progress: bool,
    /// Family the caller expects; a different discriminated family is logged
    pub declared: Option<ArticleFamily>,
}

impl BatchConfig {
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            progress_interval: Duration::from_millis(DEFAULT_PROGRESS_INTERVAL_MS),
            show_progress: false,
            declared: None,
        }
    }
}

/// Pair input and output locations into work items
///
/// The lists must have equal length.
pub fn work_items(inputs: &[PathBuf], outputs: &[PathBuf]) -> Result<Vec<WorkItem>, BatchError> {
    if inputs.len() != outputs.len() {
        return Err(BatchError::Config(format!(
            "{} input(s) but {} output(s); counts must match",
            inputs.len(),
            outputs.len()
        )));
    }
    Ok(inputs
        .iter()
        .zip(outputs)
        .map(|(input, output)| WorkItem::new(input, output))
        .collect())
}

/// Resources shared by every worker task
#[derive(Clone)]
struct WorkerContext {
    items: Arc<Vec<WorkItem>>,
    cursor: Arc<AtomicUsize>,
    gate: Arc<Semaphore>,
    schemas: Arc<SchemaSet>,
    report: Arc<ReportLog>,
    counter: ProgressCounter,
    results: mpsc::UnboundedSender<ConversionResult>,
    declared: Option<ArticleFamily>,
}

/// Runs a batch of conversions with bounded concurrency
pub struct BatchOrchestrator {
    config: BatchConfig,
    schemas: Arc<SchemaSet>,
    report: Arc<ReportLog>,
    counter: ProgressCounter,
    state: BatchState,
}

impl BatchOrchestrator {
    /// Create a runner; a worker count of zero is a configuration error
    pub fn new(
        config: BatchConfig,
        schemas: Arc<SchemaSet>,
        report: Arc<ReportLog>,
    ) -> Result<Self, BatchError> {
        if config.workers == 0 {
            return Err(BatchError::Config(
                "number of workers must be a positive integer".to_string(),
            ));
        }

        let cpu_count = num_cpus::get();
        if config.workers > cpu_count {
            warn!(
                workers = config.workers,
                cpu_count, "Worker count exceeds available CPUs"
            );
        }

        Ok(Self {
            config,
            schemas,
            report,
            counter: ProgressCounter::new(),
            state: BatchState::Idle,
        })
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Completed-item counter shared with the workers
    pub fn progress(&self) -> &ProgressCounter {
        &self.counter
    }

    /// Run every item to a terminal state
    ///
    /// Returns the summary when all items succeed. Otherwise returns
    /// [`BatchError::Fatal`] if a fatal error stopped the batch, or
    /// [`BatchError::ItemsFailed`] carrying the first failure in completion
    /// order.
    pub async fn run(&mut self, items: Vec<WorkItem>) -> Result<BatchSummary, BatchError> {
        let start = Instant::now();
        let total = items.len();
        let pool_size = pool_size(self.config.workers, total);
        self.state = BatchState::Running;

        info!(
            total,
            workers = self.config.workers,
            pool_size,
            "Starting batch conversion"
        );

        let reporter = ProgressReporter::spawn(
            self.counter.clone(),
            total,
            self.config.progress_interval,
            self.config.show_progress,
        );

        let (tx, mut rx) = mpsc::unbounded_channel();
        let ctx = WorkerContext {
            items: Arc::new(items),
            cursor: Arc::new(AtomicUsize::new(0)),
            gate: Arc::new(Semaphore::new(self.config.workers)),
            schemas: Arc::clone(&self.schemas),
            report: Arc::clone(&self.report),
            counter: self.counter.clone(),
            results: tx,
            declared: self.config.declared,
        };
        let gate = Arc::clone(&ctx.gate);

        let mut pool = JoinSet::new();
        for worker_id in 0..pool_size {
            pool.spawn(worker_loop(worker_id, ctx.clone()));
        }
        // Only the workers hold senders now; the channel closes when they exit
        drop(ctx);

        let mut results = Vec::with_capacity(total);
        let mut fatal: Option<ItemError> = None;
        while let Some(result) = rx.recv().await {
            if let Err(e) = &result.outcome {
                if e.is_fatal() && fatal.is_none() {
                    error!(input = %e.input.display(), stage = %e.stage, error = %e.source, "Fatal error, stopping batch");
                    fatal = Some(e.clone());
                }
            }
            results.push(result);
        }

        self.state = BatchState::Draining;
        let rendered = reporter.finish().await;
        debug!(rendered, total, "Progress reporter drained");

        while let Some(joined) = pool.join_next().await {
            if let Err(join_err) = joined {
                error!(error = %join_err, "Worker task failed");
                gate.close();
                fatal.get_or_insert_with(|| {
                    ItemError::new(
                        PathBuf::new(),
                        PathBuf::new(),
                        Stage::Worker,
                        ConvertError::Worker(join_err.to_string()),
                    )
                });
            }
        }
        self.state = BatchState::Done;

        let summary = BatchSummary::from_results(total, results, start.elapsed());
        info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            skipped = summary.skipped(),
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Batch conversion finished"
        );

        if let Some(error) = fatal {
            return Err(BatchError::Fatal { error, summary });
        }
        match summary.first_error().cloned() {
            Some(first) => Err(BatchError::ItemsFailed { first, summary }),
            None => Ok(summary),
        }
    }
}

/// Number of worker tasks to spawn; this is the concurrency bound
fn pool_size(workers: usize, total: usize) -> usize {
    workers.min(total)
}

async fn worker_loop(worker_id: usize, ctx: WorkerContext) {
    debug!(worker_id, "Worker started");

    loop {
        // A closed gate means a fatal error elsewhere; start nothing new
        let Ok(permit) = Arc::clone(&ctx.gate).acquire_owned().await else {
            debug!(worker_id, "Gate closed, worker stopping");
            break;
        };

        let index = ctx.cursor.fetch_add(1, Ordering::SeqCst);
        let Some(item) = ctx.items.get(index).cloned() else {
            break;
        };

        let outcome = process_item(&item, &ctx).await;
        match &outcome {
            Ok(family) => {
                debug!(worker_id, input = %item.input.display(), family = %family, "Converted");
            }
            Err(e) => {
                warn!(
                    worker_id,
                    input = %e.input.display(),
                    stage = %e.stage,
                    error = %e.source,
                    "Conversion failed"
                );
                if e.is_fatal() {
                    ctx.gate.close();
                }
            }
        }

        ctx.counter.increment();
        drop(permit);

        let result = ConversionResult {
            index,
            input: item.input,
            output: item.output,
            outcome,
        };
        if ctx.results.send(result).is_err() {
            break;
        }
    }

    debug!(worker_id, "Worker finished");
}

async fn process_item(item: &WorkItem, ctx: &WorkerContext) -> Result<ArticleFamily, ItemError> {
    let blocking_item = item.clone();
    let schemas = Arc::clone(&ctx.schemas);
    let family = tokio::task::spawn_blocking(move || convert_file(&blocking_item, &schemas))
        .await
        .map_err(|e| {
            ItemError::new(
                &item.input,
                &item.output,
                Stage::Worker,
                ConvertError::Worker(e.to_string()),
            )
        })??;

    if let Some(declared) = ctx.declared {
        if declared != family {
            warn!(
                input = %item.input.display(),
                declared = %declared,
                detected = %family,
                "Document family differs from the declared mode"
            );
        }
    }

    ctx.report
        .append_entry(&item.input, &item.output)
        .await
        .map_err(|e| {
            ItemError::new(
                &item.input,
                &item.output,
                Stage::Report,
                ConvertError::ReportAppend(e),
            )
        })?;

    Ok(family)
}
