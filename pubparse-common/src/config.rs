//! Configuration loading and resolution
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (highest priority; clap also maps the environment
//!    variable onto the same argument)
//! 2. TOML config file
//! 3. Compiled default (fallback)
//!
//! A missing default config file is not an error: a warning is logged and the
//! compiled defaults are used.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default number of concurrent conversion workers
pub const DEFAULT_WORKERS: usize = 8;

/// Default report file name, created inside the output directory
pub const DEFAULT_REPORT_NAME: &str = "report.tsv";

/// Default interval between progress renders
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 100;

/// Environment variable naming the worker count
pub const ENV_WORKERS: &str = "PUBPARSE_WORKERS";

/// Environment variable naming the schema directory
pub const ENV_SCHEMA_DIR: &str = "PUBPARSE_SCHEMA_DIR";

/// Environment variable naming an explicit config file
pub const ENV_CONFIG: &str = "PUBPARSE_CONFIG";

/// Bootstrap configuration loaded from TOML file
///
/// Every field is optional; absent values fall through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TomlConfig {
    /// Number of concurrent workers
    #[serde(default)]
    pub workers: Option<i64>,

    /// Directory holding `pubmed_json_schema.json` and `pmc_json_schema.json`
    #[serde(default)]
    pub schema_dir: Option<PathBuf>,

    /// Report file name inside the output directory
    #[serde(default)]
    pub report_name: Option<String>,

    /// Progress render interval in milliseconds
    #[serde(default)]
    pub progress_interval_ms: Option<u64>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error or a full directive)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Report file name, falling back to [`DEFAULT_REPORT_NAME`]
    pub fn report_name(&self) -> &str {
        self.report_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_REPORT_NAME)
    }

    /// Progress interval, falling back to [`DEFAULT_PROGRESS_INTERVAL_MS`]
    pub fn progress_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(
            self.progress_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_PROGRESS_INTERVAL_MS),
        )
    }
}

/// Load the TOML configuration
///
/// An explicitly named file must exist and parse. Without an explicit path the
/// platform default location is tried; if nothing is there the compiled
/// defaults are returned.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        let config = TomlConfig::from_toml_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        return Ok(config);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            let content = std::fs::read_to_string(&path)?;
            let config = TomlConfig::from_toml_str(&content)?;
            info!("Configuration loaded from {}", path.display());
            Ok(config)
        }
        Some(path) => {
            warn!(
                "No config file at {}, using built-in defaults",
                path.display()
            );
            Ok(TomlConfig::default())
        }
        None => {
            warn!("Could not determine config directory, using built-in defaults");
            Ok(TomlConfig::default())
        }
    }
}

/// Platform default config file location (`<config dir>/pubparse/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pubparse").join("config.toml"))
}

/// Reject non-positive worker counts
pub fn validate_workers(workers: i64) -> Result<usize> {
    if workers <= 0 {
        return Err(Error::InvalidInput(format!(
            "invalid number of workers: {} (must be a positive integer)",
            workers
        )));
    }
    usize::try_from(workers)
        .map_err(|_| Error::InvalidInput(format!("invalid number of workers: {}", workers)))
}

/// Resolve the worker count: CLI/ENV → TOML → compiled default
pub fn resolve_workers(cli: Option<i64>, toml_config: &TomlConfig) -> Result<usize> {
    if let Some(workers) = cli {
        return validate_workers(workers);
    }
    if let Some(workers) = toml_config.workers {
        return validate_workers(workers);
    }
    Ok(DEFAULT_WORKERS)
}

/// Resolve the schema directory: CLI/ENV → TOML → `./schemas` → compiled-in
///
/// `compiled_default` is the crate's own `schemas/` directory, supplied by the
/// binary so a development checkout works from any working directory.
pub fn resolve_schema_dir(
    cli: Option<&Path>,
    toml_config: &TomlConfig,
    compiled_default: &Path,
) -> PathBuf {
    if let Some(dir) = cli {
        return dir.to_path_buf();
    }
    if let Some(dir) = &toml_config.schema_dir {
        return dir.clone();
    }
    let local = PathBuf::from("schemas");
    if local.is_dir() {
        return local;
    }
    compiled_default.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_workers_rejects_non_positive() {
        assert!(matches!(validate_workers(0), Err(Error::InvalidInput(_))));
        assert!(matches!(validate_workers(-3), Err(Error::InvalidInput(_))));
        assert_eq!(validate_workers(4).unwrap(), 4);
    }

    #[test]
    fn test_report_name_falls_back_on_blank() {
        let config = TomlConfig {
            report_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.report_name(), DEFAULT_REPORT_NAME);
    }

    #[test]
    fn test_progress_interval_ignores_zero() {
        let config = TomlConfig {
            progress_interval_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(
            config.progress_interval(),
            std::time::Duration::from_millis(DEFAULT_PROGRESS_INTERVAL_MS)
        );
    }
}
