//! Cleanup execution logic.

use super::types::{CleanupPlan, CleanupReport, GroupKind, GroupSummary, OutcomeStatus, TaskOutcome};
use crate::config::Config;
use crate::deletion::DeletionTask;
use crate::fs::{authorize, remove_path};
use tracing::{debug, warn};

/// Run every task of the plan and collect one outcome per task.
///
/// Each task is authorized on its own right before it runs. In dry-run mode
/// authorized tasks are recorded as previews and nothing is removed. A denied
/// or failed task never stops the ones after it.
pub fn execute_cleanup(config: &Config, plan: &CleanupPlan) -> CleanupReport {
    let outcomes = plan
        .tasks
        .iter()
        .map(|task| run_task(config, task))
        .collect();

    CleanupReport {
        server_root: config.server_root.clone(),
        ide: config.ide,
        dry_run: config.dry_run,
        binaries_dir: plan.binaries_dir.clone(),
        groups: summarize_groups(plan),
        outcomes,
        warnings: plan.warnings.clone(),
        notes: plan.notes.clone(),
    }
}

fn run_task(config: &Config, task: &DeletionTask) -> TaskOutcome {
    let status = match authorize(&task.path, &config.server_root, &config.home_dir) {
        Err(reason) => {
            warn!(path = %task.path.display(), %reason, "deletion denied");
            OutcomeStatus::Denied { reason }
        }
        Ok(()) if config.dry_run => {
            debug!(path = %task.path.display(), kind = %task.kind, "would remove");
            OutcomeStatus::Previewed
        }
        Ok(()) => match remove_path(&task.path) {
            Ok(()) => {
                debug!(path = %task.path.display(), kind = %task.kind, "removed");
                OutcomeStatus::Removed
            }
            Err(e) => {
                warn!(path = %task.path.display(), error = %e, "removal failed");
                OutcomeStatus::Failed {
                    error: format!("failed to remove '{}': {}", task.path.display(), e),
                }
            }
        },
    };

    TaskOutcome {
        path: task.path.clone(),
        kind: task.kind,
        label: task.label.clone(),
        status,
    }
}

/// Server group first, then extension groups in name order.
pub fn summarize_groups(plan: &CleanupPlan) -> Vec<GroupSummary> {
    plan.server
        .iter()
        .map(|d| GroupSummary::from_decision(d, GroupKind::Server))
        .chain(
            plan.extensions
                .values()
                .map(|d| GroupSummary::from_decision(d, GroupKind::Extension)),
        )
        .collect()
}
