//! Common error types for pubparse

use thiserror::Error;

/// Common result type for pubparse operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading configuration and validating startup input
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML configuration file could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input (paths, counts)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
