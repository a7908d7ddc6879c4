//! CLI-level errors (wraps outline errors)

use thiserror::Error;

use crate::errors::OutlineError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Outline(#[from] OutlineError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Outline(e) => match e {
                OutlineError::Parse { .. }
                | OutlineError::AddressOutOfRange { .. }
                | OutlineError::InvalidMove(_) => crate::exitcode::DATAERR,
                OutlineError::Io(_) => crate::exitcode::IOERR,
                OutlineError::Internal(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}
