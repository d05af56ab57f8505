//! vsclean: reclaim disk space from VS Code and Cursor remote servers.
//!
//! This is the main entry point for the `vsclean` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and maps errors to
//! exit codes.

mod cli;
mod commands;
pub mod config;
pub mod deletion;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod prune;
pub mod siblings;
pub mod version;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Diagnostics go to stderr so reports on stdout stay clean. `RUST_LOG` wins
/// over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
