//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
///
/// Only these abort a run. Per-line parse and execution failures are
/// reported by the driver and never surface here.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input script could not be opened
    #[error("failed to open file '{}': {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error while reading the script or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
