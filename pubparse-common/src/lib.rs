//! # pubparse common library
//!
//! Shared code for the pubparse workspace:
//! - Error type and result alias
//! - Bootstrap configuration (TOML file, environment, compiled defaults)

pub mod config;
pub mod error;

pub use error::{Error, Result};
