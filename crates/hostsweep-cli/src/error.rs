//! Error types for the hostsweep CLI.
//!
//! CliError wraps CoreError from the shared library and adds CLI-specific variants.

use hostsweep_core::error::CoreError;
use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const NETWORK_ERROR: i32 = 2;
    pub const INVALID_ARGS: i32 = 4;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) => match e {
                CoreError::InvalidPrefix(_)
                | CoreError::InvalidRange { .. }
                | CoreError::InvalidTimeout(_) => exit_codes::INVALID_ARGS,
                CoreError::Client(_) => exit_codes::NETWORK_ERROR,
            },
            CliError::InvalidArgument(_) => exit_codes::INVALID_ARGS,
        }
    }
}
