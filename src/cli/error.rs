//! CLI-level errors

use std::io;

use thiserror::Error;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}
