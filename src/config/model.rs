//! Config struct definition.

use super::types::{IdeKind, RunFlags};
use std::path::PathBuf;

/// Resolved configuration for one vsclean invocation.
///
/// Built once by [`Config::resolve`] and only read afterwards. Every path is
/// absolute; `server_root` is canonical (symlinks followed) and has been
/// checked against the protected-path list.
#[derive(Debug, Clone)]
pub struct Config {
    /// IDE layout being cleaned.
    pub ide: IdeKind,

    /// Canonical server installation directory. Nothing outside it is removed.
    pub server_root: PathBuf,

    /// The user's home directory, never a valid deletion target.
    pub home_dir: PathBuf,

    /// Preview only.
    pub dry_run: bool,

    /// Include `data/User/History` in the cleanup.
    pub clean_history: bool,
}

impl Config {
    /// Build a config for an already validated root.
    pub(crate) fn new(
        ide: IdeKind,
        server_root: PathBuf,
        home_dir: PathBuf,
        flags: RunFlags,
    ) -> Self {
        Self {
            ide,
            server_root,
            home_dir,
            dry_run: flags.dry_run,
            clean_history: flags.clean_history,
        }
    }

    /// `{server_root}/extensions`.
    pub fn extensions_dir(&self) -> PathBuf {
        self.server_root.join("extensions")
    }
}
