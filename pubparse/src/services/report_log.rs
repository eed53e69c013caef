//! Append-only conversion report
//!
//! One handle is shared by every worker. Each write takes the mutex for its
//! whole line and is flushed and synced before the lock is released, so lines
//! never interleave and a crash cannot leave a partial entry behind.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

/// Marker that starts every per-file entry
pub const ENTRY_MARKER: &str = ">>> Input file:";

/// Run metadata written at the top of a session
#[derive(Debug, Clone)]
pub struct SessionHeader {
    pub started: DateTime<Local>,
    pub input: PathBuf,
    pub output: PathBuf,
    pub inputs: usize,
    pub workers: usize,
}

impl SessionHeader {
    pub fn render(&self) -> String {
        format!(
            ">>> Starting Time: {}\n>>> Input Directory: {}\n>>> Output Directory: {}\n>>> Number of Inputs: {}\n>>> Workers: {}\n",
            self.started.format("%Y-%m-%d %H:%M:%S"),
            self.input.display(),
            self.output.display(),
            self.inputs,
            self.workers,
        )
    }
}

/// Render one report entry
pub fn format_entry(input: &Path, output: &Path) -> String {
    format!(
        "\n{} {}\t Output file: {}\n",
        ENTRY_MARKER,
        input.display(),
        output.display()
    )
}

/// Mutex-guarded report file opened in append mode
#[derive(Debug)]
pub struct ReportLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl ReportLog {
    /// Open (creating if needed) the report for appending
    pub async fn open_append(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        debug!(report = %path.display(), "Report opened");
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the session header block
    pub async fn write_header(&self, header: &SessionHeader) -> std::io::Result<()> {
        self.write_all(header.render().as_bytes()).await
    }

    /// Append the entry for one successful conversion
    pub async fn append_entry(&self, input: &Path, output: &Path) -> std::io::Result<()> {
        self.write_all(format_entry(input, output).as_bytes()).await
    }

    async fn write_all(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = self.file.lock().await;
        file.write_all(bytes).await?;
        file.flush().await?;
        file.sync_data().await
    }
}

/// Count per-file entries in report text
pub fn count_entries(report: &str) -> usize {
    report.matches(ENTRY_MARKER).count()
}
