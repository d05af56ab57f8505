//! Data types for the clean command.

use crate::config::IdeKind;
use crate::deletion::{DeletionTask, TaskKind};
use crate::fs::DenialReason;
use crate::version::{RetentionDecision, VersionEntry};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Everything a run intends to remove, plus the decisions behind it.
#[derive(Debug, Default)]
pub struct CleanupPlan {
    /// `bin/` or `cli/servers/`, whichever was found.
    pub binaries_dir: Option<PathBuf>,
    /// Retention decision over all server versions.
    pub server: Option<RetentionDecision>,
    /// Retention decisions keyed by extension base name.
    pub extensions: BTreeMap<String, RetentionDecision>,
    /// Deletion tasks in execution order.
    pub tasks: Vec<DeletionTask>,
    /// Non-fatal scan problems.
    pub warnings: Vec<String>,
    /// Informational messages (missing directories and the like).
    pub notes: Vec<String>,
}

/// How a single task ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Deleted from disk.
    Removed,
    /// Dry run: would have been deleted.
    Previewed,
    /// Refused by the path guard.
    Denied { reason: DenialReason },
    /// Removal was attempted and failed.
    Failed { error: String },
}

/// One record per deletion task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskOutcome {
    pub path: PathBuf,
    pub kind: TaskKind,
    pub label: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl TaskOutcome {
    /// Whether the filesystem was actually modified.
    pub fn executed(&self) -> bool {
        matches!(self.status, OutcomeStatus::Removed)
    }

    /// Denial or failure text, if any.
    pub fn error(&self) -> Option<String> {
        match &self.status {
            OutcomeStatus::Denied { reason } => Some(reason.to_string()),
            OutcomeStatus::Failed { error } => Some(error.clone()),
            OutcomeStatus::Removed | OutcomeStatus::Previewed => None,
        }
    }
}

/// Which kind of group a summary describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Server,
    Extension,
}

/// A version as shown in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionSummary {
    pub name: String,
    pub identity: String,
    pub modified_at: DateTime<Utc>,
}

impl From<&VersionEntry> for VersionSummary {
    fn from(entry: &VersionEntry) -> Self {
        Self {
            name: entry.name.clone(),
            identity: entry.identity.clone(),
            modified_at: DateTime::<Utc>::from(entry.modified_at),
        }
    }
}

/// Group-level view of a retention decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub group_key: String,
    pub kind: GroupKind,
    pub total: usize,
    pub kept: VersionSummary,
    pub removed: Vec<VersionSummary>,
}

impl GroupSummary {
    pub(crate) fn from_decision(decision: &RetentionDecision, kind: GroupKind) -> Self {
        Self {
            group_key: decision.group_key.clone(),
            kind,
            total: decision.total(),
            kept: VersionSummary::from(&decision.kept),
            removed: decision.removed.iter().map(VersionSummary::from).collect(),
        }
    }
}

/// Result of a cleanup run, real or previewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub server_root: PathBuf,
    pub ide: IdeKind,
    pub dry_run: bool,
    pub binaries_dir: Option<PathBuf>,
    /// Server group first, then extensions by name.
    pub groups: Vec<GroupSummary>,
    /// One entry per task, in execution order.
    pub outcomes: Vec<TaskOutcome>,
    pub warnings: Vec<String>,
    pub notes: Vec<String>,
}

impl CleanupReport {
    /// Number of paths actually deleted.
    pub fn removed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.executed()).count()
    }

    /// Number of paths a dry run would delete.
    pub fn previewed_count(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::Previewed))
    }

    /// Number of tasks refused by the path guard.
    pub fn denied_count(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::Denied { .. }))
    }

    /// Number of removals that failed.
    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::Failed { .. }))
    }

    /// True when any removal failed. Never true for a dry run.
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    fn count(&self, pred: impl Fn(&OutcomeStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}
