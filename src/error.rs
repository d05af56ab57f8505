//! Error types for the vsclean CLI.
//!
//! Uses thiserror for derive macros. Only configuration problems stop a run
//! before it starts; everything that goes wrong while scanning or deleting is
//! collected into the cleanup report instead.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for vsclean operations.
#[derive(Error, Debug)]
pub enum CleanError {
    /// The server root could not be resolved or is a protected location.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// User provided invalid arguments or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// A directory could not be listed while scanning for versions.
    #[error("Scan failed: {0}")]
    ScanError(String),

    /// One or more removals failed; reported after every task was attempted.
    #[error("Cleanup incomplete: {0}")]
    DeletionFailed(String),
}

impl CleanError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CleanError::ConfigError(_) => exit_codes::USER_ERROR,
            CleanError::UserError(_) => exit_codes::USER_ERROR,
            CleanError::ScanError(_) => exit_codes::USER_ERROR,
            CleanError::DeletionFailed(_) => exit_codes::DELETION_FAILURE,
        }
    }
}

/// Result type alias for vsclean operations.
pub type Result<T> = std::result::Result<T, CleanError>;
