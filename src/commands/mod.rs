//! Command implementations for vsclean.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod clean;
mod list;

use crate::cli::Command;
use crate::error::Result;

pub use clean::cmd_clean;
pub use list::cmd_list;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Clean(args) => cmd_clean(args),
        Command::List(args) => cmd_list(args),
    }
}
