//! Cleanup plan building logic.

use super::types::CleanupPlan;
use crate::config::Config;
use crate::deletion::{DeletionTask, TaskKind};
use crate::prune::{HistoryPlan, plan_cache_prunes, plan_history_prune};
use crate::siblings::locate_siblings;
use crate::version::{
    RetentionDecision, SERVER_GROUP, resolve, scan_extension_versions, scan_server_versions,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Current layout first, then the older `cli/servers` layout.
const BINARIES_DIR_CANDIDATES: &[&str] = &["bin", "cli/servers"];

/// Build the cleanup plan by scanning the server root.
///
/// Order of tasks: old server versions (each followed by its sibling files),
/// old extension versions, cache directories, then history when requested.
/// Scan problems become warnings; planning itself never fails.
pub fn build_cleanup_plan(config: &Config) -> CleanupPlan {
    let mut plan = CleanupPlan::default();

    plan_server_versions(config, &mut plan);
    plan_extension_versions(config, &mut plan);

    let caches = plan_cache_prunes(&config.server_root);
    debug!(count = caches.len(), "cache directories found");
    plan.tasks.extend(caches);

    match plan_history_prune(&config.server_root, config.clean_history) {
        HistoryPlan::NotRequested => {}
        HistoryPlan::Absent => plan
            .notes
            .push("no edit history found under data/User/History".to_string()),
        HistoryPlan::Remove(task) => plan.tasks.push(task),
    }

    plan
}

/// Locate the directory holding server builds, if any.
pub fn locate_binaries_dir(server_root: &Path) -> Option<PathBuf> {
    BINARIES_DIR_CANDIDATES
        .iter()
        .map(|rel| server_root.join(rel))
        .find(|dir| dir.is_dir())
}

fn plan_server_versions(config: &Config, plan: &mut CleanupPlan) {
    let Some(bin_dir) = locate_binaries_dir(&config.server_root) else {
        plan.notes.push(
            "no server binaries directory found (looked for bin/ and cli/servers/)".to_string(),
        );
        return;
    };
    info!(dir = %bin_dir.display(), "scanning server versions");
    plan.binaries_dir = Some(bin_dir.clone());

    let scan = match scan_server_versions(&bin_dir) {
        Ok(scan) => scan,
        Err(e) => {
            plan.warnings.push(e.to_string());
            return;
        }
    };
    plan.warnings.extend(scan.warnings);
    if !scan.skipped.is_empty() {
        debug!(names = ?scan.skipped, "ignored non-version directories");
    }

    let Some(decision) = resolve(scan.entries).remove(SERVER_GROUP) else {
        plan.notes.push(format!("no server versions found in {}", bin_dir.display()));
        return;
    };

    info!(
        kept = %decision.kept.name,
        removing = decision.removed.len(),
        "server versions resolved"
    );

    let mut owners = sibling_owners(config, &decision, &mut plan.warnings);

    for entry in &decision.removed {
        plan.tasks.push(DeletionTask::new(
            entry.path.clone(),
            format!("server {}", entry.identity),
            TaskKind::ServerVersion,
        ));

        if let Some(siblings) = owners.remove(entry.identity.as_str()) {
            plan.tasks.extend(siblings);
        }
    }

    plan.server = Some(decision);
}

/// Assign every companion file to exactly one server build.
///
/// Cursor's prefix patterns overlap (`.abc1234*` also matches
/// `.abc1234-arm64.log`), so a file goes to the longest identity whose
/// patterns match it, whether that build is kept or removed. Returns the
/// files owned by each identity, sorted by path.
fn sibling_owners(
    config: &Config,
    decision: &RetentionDecision,
    warnings: &mut Vec<String>,
) -> HashMap<String, Vec<DeletionTask>> {
    let mut best: HashMap<PathBuf, (&str, DeletionTask)> = HashMap::new();

    for entry in std::iter::once(&decision.kept).chain(&decision.removed) {
        let identity = entry.identity.as_str();
        let siblings = match locate_siblings(&config.server_root, config.ide, identity) {
            Ok(siblings) => siblings,
            Err(e) => {
                warnings.push(e.to_string());
                continue;
            }
        };
        for task in siblings {
            let more_specific = best
                .get(&task.path)
                .is_none_or(|(owner, _)| identity.len() > owner.len());
            if more_specific {
                best.insert(task.path.clone(), (identity, task));
            }
        }
    }

    let mut owned: HashMap<String, Vec<DeletionTask>> = HashMap::new();
    for (identity, task) in best.into_values() {
        owned.entry(identity.to_string()).or_default().push(task);
    }
    for tasks in owned.values_mut() {
        tasks.sort_by(|a, b| a.path.cmp(&b.path));
    }
    owned
}

fn plan_extension_versions(config: &Config, plan: &mut CleanupPlan) {
    let ext_dir = config.extensions_dir();
    // Something other than a directory at this path is reported by the scan.
    if !ext_dir.exists() {
        plan.notes.push(format!("no extensions directory at {}", ext_dir.display()));
        return;
    }
    info!(dir = %ext_dir.display(), "scanning extensions");

    let scan = match scan_extension_versions(&ext_dir) {
        Ok(scan) => scan,
        Err(e) => {
            plan.warnings.push(e.to_string());
            return;
        }
    };
    plan.warnings.extend(scan.warnings);
    if !scan.skipped.is_empty() {
        debug!(names = ?scan.skipped, "ignored unversioned extension directories");
    }

    let decisions = resolve(scan.entries);
    for decision in decisions.values() {
        debug!(
            extension = %decision.group_key,
            kept = %decision.kept.identity,
            removing = decision.removed.len(),
            "extension group resolved"
        );
        for entry in &decision.removed {
            plan.tasks.push(DeletionTask::new(
                entry.path.clone(),
                format!("{} {}", decision.group_key, entry.identity),
                TaskKind::ExtensionVersion,
            ));
        }
    }

    plan.extensions = decisions;
}
