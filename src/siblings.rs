//! Companion files of removed server versions.
//!
//! Both IDEs leave files next to the version directories, directly in the
//! server root, named after the build they belong to:
//!
//! - Cursor: `.{identity}.log`, `.{identity}.pid`, `.{identity}.token`, ...
//!   matched by the `.{identity}` prefix.
//! - VS Code: the `code-{identity}` launcher and the `.cli.{identity}.log` log.
//!
//! Only files and symlinks are returned; directories never match.

use crate::config::IdeKind;
use crate::deletion::{DeletionTask, TaskKind};
use crate::error::{CleanError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Glob patterns for the companion files of `identity`.
pub fn sibling_patterns(ide: IdeKind, identity: &str) -> Vec<String> {
    match ide {
        IdeKind::Cursor => vec![format!(".{identity}*")],
        IdeKind::Vscode => vec![format!("code-{identity}"), format!(".cli.{identity}.log")],
    }
}

/// Find companion files of `identity` directly inside `server_root`.
///
/// Not recursive. Results are sorted by file name. No matches is not an error.
pub fn locate_siblings(
    server_root: &Path,
    ide: IdeKind,
    identity: &str,
) -> Result<Vec<DeletionTask>> {
    let globs = build_globset(&sibling_patterns(ide, identity)).map_err(|e| {
        CleanError::ScanError(format!("invalid sibling pattern for '{}': {}", identity, e))
    })?;

    let entries = fs::read_dir(server_root).map_err(|e| {
        CleanError::ScanError(format!(
            "failed to list '{}': {}",
            server_root.display(),
            e
        ))
    })?;

    let mut tasks: Vec<DeletionTask> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(root = %server_root.display(), error = %e, "unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .filter(|entry| globs.is_match(entry.file_name()))
        .map(|entry| {
            DeletionTask::new(
                entry.path(),
                format!("{} companion file", identity),
                TaskKind::SiblingFile,
            )
        })
        .collect();

    tasks.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(tasks)
}

fn build_globset(patterns: &[String]) -> std::result::Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}
