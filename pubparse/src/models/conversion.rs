//! Per-item and per-batch conversion records

use super::ArticleFamily;
use crate::error::{ItemError, Stage};
use std::path::PathBuf;
use std::time::Duration;

/// One input/output pair scheduled for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl WorkItem {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Per-item lifecycle
///
/// Pending → Parsing → Normalizing → Serializing → Validating → Reported,
/// or Failed at whichever stage short-circuited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Pending,
    Parsing,
    Normalizing,
    Serializing,
    Validating,
    Reported,
    Failed(Stage),
}

impl ItemState {
    /// Next state after the current stage completes
    pub fn advance(self) -> Self {
        match self {
            ItemState::Pending => ItemState::Parsing,
            ItemState::Parsing => ItemState::Normalizing,
            ItemState::Normalizing => ItemState::Serializing,
            ItemState::Serializing => ItemState::Validating,
            ItemState::Validating => ItemState::Reported,
            terminal => terminal,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ItemState::Reported | ItemState::Failed(_))
    }
}

/// Global batch lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Running,
    Draining,
    Done,
}

/// Outcome of one work item; never persisted
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Position of the item in the submitted list
    pub index: usize,
    pub input: PathBuf,
    pub output: PathBuf,
    pub outcome: Result<ArticleFamily, ItemError>,
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Terminal item state implied by the outcome
    pub fn state(&self) -> ItemState {
        match &self.outcome {
            Ok(_) => ItemState::Reported,
            Err(e) => ItemState::Failed(e.stage),
        }
    }
}

/// Totals for a finished batch
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Results in completion order
    pub results: Vec<ConversionResult>,
    pub elapsed: Duration,
}

impl BatchSummary {
    pub fn from_results(total: usize, results: Vec<ConversionResult>, elapsed: Duration) -> Self {
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        let failed = results.len() - succeeded;
        Self {
            total,
            succeeded,
            failed,
            results,
            elapsed,
        }
    }

    /// Items that never ran because a fatal error closed the batch
    pub fn skipped(&self) -> usize {
        self.total.saturating_sub(self.succeeded + self.failed)
    }

    /// First failure in completion order
    pub fn first_error(&self) -> Option<&ItemError> {
        self.results.iter().find_map(|r| r.outcome.as_ref().err())
    }
}
