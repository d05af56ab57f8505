//! Deletion tasks produced by planning and consumed by execution.

use serde::Serialize;
use std::path::PathBuf;

/// What kind of artifact a deletion task targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// An old server build directory under `bin/` or `cli/servers/`.
    ServerVersion,
    /// A log, pid, token, or launcher file named after an old server build.
    SiblingFile,
    /// An older copy of an installed extension.
    ExtensionVersion,
    /// A well-known cache directory under `data/`.
    CacheDir,
    /// `data/User/History`.
    HistoryDir,
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskKind::ServerVersion => write!(f, "server"),
            TaskKind::SiblingFile => write!(f, "sibling"),
            TaskKind::ExtensionVersion => write!(f, "extension"),
            TaskKind::CacheDir => write!(f, "cache"),
            TaskKind::HistoryDir => write!(f, "history"),
        }
    }
}

/// A single path scheduled for removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionTask {
    /// Absolute path to remove.
    pub path: PathBuf,
    /// Short human description, e.g. `foo.bar 1.0.0`.
    pub label: String,
    /// Artifact kind.
    pub kind: TaskKind,
}

impl DeletionTask {
    /// Create a new task.
    pub fn new(path: PathBuf, label: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            path,
            label: label.into(),
            kind,
        }
    }
}
