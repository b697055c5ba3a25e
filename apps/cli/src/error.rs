use blockcypher_client::ClientError;
use common::ErrorLocation;

use thiserror::Error;

/// Errors surfaced by the `bcy` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Local failure in the CLI itself (logging, arguments, output).
    #[error("Cli Error: {message} {location}")]
    Cli {
        message: String,
        location: ErrorLocation,
    },

    /// Anything the SDK reported.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CliError {
    #[track_caller]
    pub fn cli(message: impl Into<String>) -> Self {
        CliError::Cli {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Process exit code: 2 for usage/local problems, 1 for API failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Cli { .. } => 2,
            CliError::Client(_) => 1,
        }
    }
}
