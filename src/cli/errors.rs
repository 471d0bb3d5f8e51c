//! CLI-specific error types

use std::io;

use thiserror::Error;

use crate::errors::TallyError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] TallyError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Engine(e) => e.code(),
            CliError::InvalidArgument(_) => "TALLY_CLI_INVALID_ARGUMENT",
            CliError::Io(_) => "TALLY_CLI_IO_ERROR",
            CliError::Json(_) => "TALLY_CLI_JSON_ERROR",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
