//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Date matching neither YYYYMMDD nor DD-Mon-YYYY.
    #[error("Invalid date: {0}. Use YYYYMMDD or DD-Mon-YYYY.")]
    InvalidDate(String),

    /// Holiday configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
