//! CLI argument parsing for vsclean.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::IdeKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// vsclean: reclaim disk space from VS Code and Cursor remote servers.
///
/// Keeps the newest server build and the newest copy of every extension,
/// removes the rest together with logs and launchers left by old builds,
/// and clears well-known cache directories. Nothing outside the server
/// directory is ever touched.
#[derive(Parser, Debug)]
#[command(name = "vsclean")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log every decision (skipped names, per-task results) to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands for vsclean.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove stale server versions, old extensions, and caches.
    ///
    /// Use `--dry-run` to preview exactly what a real run would remove
    /// (and refuse to remove).
    Clean(CleanArgs),

    /// Show installed server versions and extensions.
    ///
    /// Prints which version of each group would be kept. Read-only.
    List(ListArgs),
}

/// Which server installation to operate on.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// IDE whose server directory is cleaned.
    #[arg(long, value_enum, default_value_t = IdeKind::Vscode)]
    pub ide: IdeKind,

    /// Server directory; overrides VSCODE_SERVER_DIR / CURSOR_SERVER_DIR.
    #[arg(long, value_name = "PATH")]
    pub server_dir: Option<PathBuf>,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Show what would be removed without deleting anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Also remove the edit history under data/User/History.
    #[arg(long)]
    pub clean_history: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print the groups as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
