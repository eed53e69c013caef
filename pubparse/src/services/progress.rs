//! Batch progress tracking
//!
//! Workers bump a shared [`ProgressCounter`]; one [`ProgressReporter`] task
//! samples it on an interval and renders a progress bar until it is told to
//! stop, then renders the final count once more.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

/// Shared count of completed work items (successes and failures)
#[derive(Debug, Clone, Default)]
pub struct ProgressCounter(Arc<AtomicUsize>);

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed item; returns the new count
    pub fn increment(&self) -> usize {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

/// Handle to the background progress renderer
pub struct ProgressReporter {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<usize>,
}

impl ProgressReporter {
    /// Spawn the reporter task
    ///
    /// With `show_bar == false` the bar is hidden and only debug logs are
    /// emitted.
    pub fn spawn(counter: ProgressCounter, total: usize, interval: Duration, show_bar: bool) -> Self {
        let bar = if show_bar {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let (stop, mut stop_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            debug!(total, "Progress reporter started");
            let start = Instant::now();
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            let mut last = usize::MAX;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let done = counter.get();
                        if done != last {
                            render(&bar, done, total, start);
                            debug!(done, total, "Conversion progress");
                            last = done;
                        }
                    }
                    _ = &mut stop_rx => break,
                }
            }

            let done = counter.get();
            render(&bar, done, total, start);
            bar.finish();
            debug!(done, total, "Progress reporter stopped");
            done
        });

        Self { stop, handle }
    }

    /// Signal the reporter, wait for its final render and return the final count
    pub async fn finish(self) -> usize {
        // The task may already have exited if the runtime is shutting down
        let _ = self.stop.send(());
        self.handle.await.unwrap_or(0)
    }
}

fn render(bar: &ProgressBar, done: usize, total: usize, start: Instant) {
    bar.set_position(done as u64);
    let elapsed = start.elapsed().as_secs_f64();
    let rate = if elapsed > 0.0 {
        done as f64 / elapsed
    } else {
        0.0
    };
    bar.set_message(format!("{:.1} files/s | {}/{}", rate, done, total));
}
