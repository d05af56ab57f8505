//! Configuration types for vsclean.
//!
//! This module defines the IDE flavours the tool understands and the
//! per-IDE constants (environment variable, default install directory)
//! used when resolving the server root.

use clap::ValueEnum;
use serde::Serialize;

/// Which remote-server layout is being cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum IdeKind {
    /// VS Code Server (`~/.vscode-server`).
    #[default]
    Vscode,
    /// Cursor Server (`~/.cursor-server`).
    Cursor,
}

impl IdeKind {
    /// Environment variable that overrides the server root.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Vscode => "VSCODE_SERVER_DIR",
            Self::Cursor => "CURSOR_SERVER_DIR",
        }
    }

    /// Install directory name under the home directory.
    pub fn default_dir_name(self) -> &'static str {
        match self {
            Self::Vscode => ".vscode-server",
            Self::Cursor => ".cursor-server",
        }
    }

    /// Human-readable product name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Vscode => "VS Code Server",
            Self::Cursor => "Cursor Server",
        }
    }
}

impl std::fmt::Display for IdeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Where the server root came from, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSource {
    /// `--server-dir` on the command line.
    Flag,
    /// The IDE-specific environment variable.
    Environment(&'static str),
    /// `~/.vscode-server` or `~/.cursor-server`.
    Default,
}

impl std::fmt::Display for RootSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RootSource::Flag => write!(f, "--server-dir"),
            RootSource::Environment(var) => write!(f, "${var}"),
            RootSource::Default => write!(f, "default location"),
        }
    }
}

/// Behaviour switches for a cleanup run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    /// Compute and report every deletion without touching the filesystem.
    pub dry_run: bool,
    /// Also remove `data/User/History`.
    pub clean_history: bool,
}
