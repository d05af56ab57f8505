//! Cache and history directories under `{server_root}/data`.

use crate::deletion::{DeletionTask, TaskKind};
use std::path::Path;
use tracing::debug;

/// Cache directories under `data/` that are always safe to drop.
pub const CACHE_DIRS: &[&str] = &["logs", "CachedExtensionVSIXs", "clp"];

/// Edit history, relative to `data/`.
pub const HISTORY_DIR: &str = "User/History";

/// Cache directories that currently exist. Missing ones are skipped quietly.
pub fn plan_cache_prunes(server_root: &Path) -> Vec<DeletionTask> {
    let data = server_root.join("data");
    CACHE_DIRS
        .iter()
        .filter_map(|name| {
            let path = data.join(name);
            if path.is_dir() {
                Some(DeletionTask::new(path, format!("data/{name}"), TaskKind::CacheDir))
            } else {
                debug!(path = %path.display(), "cache directory not present");
                None
            }
        })
        .collect()
}

/// What to do about the history directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryPlan {
    /// History cleanup was not requested.
    NotRequested,
    /// Requested, but there is no history directory.
    Absent,
    /// Requested and present.
    Remove(DeletionTask),
}

/// Plan history removal; only looks at the disk when `clean_history` is set.
pub fn plan_history_prune(server_root: &Path, clean_history: bool) -> HistoryPlan {
    if !clean_history {
        return HistoryPlan::NotRequested;
    }

    let path = server_root.join("data").join(HISTORY_DIR);
    if path.is_dir() {
        HistoryPlan::Remove(DeletionTask::new(
            path,
            format!("data/{HISTORY_DIR}"),
            TaskKind::HistoryDir,
        ))
    } else {
        HistoryPlan::Absent
    }
}
