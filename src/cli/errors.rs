//! CLI-specific error types
//!
//! All CLI errors end the process with a non-zero exit code.

use thiserror::Error;

use crate::config::{ConfigError, ValidationError};
use crate::domain::foundation::{ManifestError, SelectorError};
use crate::ports::FetchError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("{}: {}", .0.code(), .0)]
    Selector(#[from] SelectorError),

    #[error("Cannot read manifest: {0}")]
    Fetch(#[from] FetchError),

    #[error("Manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Manifest is inconsistent: {0}")]
    Manifest(#[from] ManifestError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Version '{version}' is not offered on this page (choices: {choices})")]
    NotOffered { version: String, choices: String },
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
