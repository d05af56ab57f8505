//! Server root resolution and validation.

use super::model::Config;
use super::types::{IdeKind, RootSource, RunFlags};
use crate::error::{CleanError, Result};
use crate::fs::is_protected;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Resolve the config from the process environment.
    ///
    /// Reads the IDE-specific environment variable and the home directory,
    /// then defers to [`Config::resolve`].
    pub fn from_env(ide: IdeKind, server_dir: Option<PathBuf>, flags: RunFlags) -> Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            CleanError::UserError("could not determine the home directory".to_string())
        })?;

        Self::resolve(ide, server_dir, |key| std::env::var_os(key), &home_dir, flags)
    }

    /// Resolve and validate the server root.
    ///
    /// Precedence: `server_dir` (from `--server-dir`), then the IDE's
    /// environment variable, then `~/.vscode-server` / `~/.cursor-server`.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - The root exists, is a directory, and is not protected
    /// * `Err(CleanError::ConfigError)` - Any of those checks failed
    pub fn resolve<F>(
        ide: IdeKind,
        server_dir: Option<PathBuf>,
        env_lookup: F,
        home_dir: &Path,
        flags: RunFlags,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let (candidate, source) = candidate_root(ide, server_dir, env_lookup, home_dir);
        debug!(root = %candidate.display(), %source, "resolving server root");

        if !candidate.exists() {
            return Err(CleanError::ConfigError(format!(
                "{} directory not found: {} (from {})",
                ide,
                candidate.display(),
                source
            )));
        }

        let server_root = candidate.canonicalize().map_err(|e| {
            CleanError::ConfigError(format!(
                "failed to resolve server root '{}': {}",
                candidate.display(),
                e
            ))
        })?;

        if !server_root.is_dir() {
            return Err(CleanError::ConfigError(format!(
                "server root is not a directory: {}",
                server_root.display()
            )));
        }

        let home_dir = home_dir
            .canonicalize()
            .unwrap_or_else(|_| home_dir.to_path_buf());

        if is_protected(&server_root, &home_dir) {
            return Err(CleanError::ConfigError(format!(
                "refusing to use protected directory as server root: {}",
                server_root.display()
            )));
        }

        Ok(Config::new(ide, server_root, home_dir, flags))
    }
}

/// Pick the root candidate and remember where it came from.
pub(super) fn candidate_root<F>(
    ide: IdeKind,
    server_dir: Option<PathBuf>,
    env_lookup: F,
    home_dir: &Path,
) -> (PathBuf, RootSource)
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(dir) = server_dir.filter(|d| !d.as_os_str().is_empty()) {
        return (dir, RootSource::Flag);
    }

    let var = ide.env_var();
    if let Some(value) = env_lookup(var).filter(|v| !v.is_empty()) {
        return (PathBuf::from(value), RootSource::Environment(var));
    }

    (home_dir.join(ide.default_dir_name()), RootSource::Default)
}
