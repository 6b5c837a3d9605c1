//! CLI-level errors (wraps application and config errors)

use thiserror::Error;

use crate::application::BenchError;
use crate::config::SettingsError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Bench(#[from] BenchError),

    #[error("config error: {0}")]
    Config(#[from] SettingsError),

    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot serialize tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Bench(_) | CliError::Json(_) => crate::exitcode::SOFTWARE,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}
