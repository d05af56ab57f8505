//! Display and formatting utilities for clean command output.
//!
//! Rendering is a pure function of the report: no clock reads, no
//! filesystem access. Two dry runs over the same tree render identically.

use super::types::{CleanupReport, GroupKind, GroupSummary, OutcomeStatus, TaskOutcome};
use std::path::Path;

/// Render the full report: header, groups, per-task lines, and a summary.
pub fn render_report(report: &CleanupReport) -> String {
    let mut lines = Vec::new();

    let mode = if report.dry_run { " (dry run)" } else { "" };
    lines.push(format!(
        "{} at {}{}",
        report.ide,
        report.server_root.display(),
        mode
    ));
    lines.push(String::new());

    lines.extend(group_lines(
        &report.groups,
        &report.server_root,
        report.binaries_dir.as_deref(),
    ));

    if report.outcomes.is_empty() {
        lines.push("Nothing to clean.".to_string());
    } else {
        lines.push(format!("Tasks ({}):", report.outcomes.len()));
        for outcome in &report.outcomes {
            lines.push(format!("  {}", outcome_line(outcome, &report.server_root)));
        }
    }
    lines.push(String::new());

    push_messages(&mut lines, "Warnings", &report.warnings);
    push_messages(&mut lines, "Notes", &report.notes);

    if report.dry_run {
        lines.push(format!(
            "Dry-run: {} item(s) would be removed, {} denied. No changes made.",
            report.previewed_count(),
            report.denied_count()
        ));
    } else {
        lines.push(format!(
            "Cleanup complete: {} removed, {} denied, {} failed.",
            report.removed_count(),
            report.denied_count(),
            report.failed_count()
        ));
    }

    lines.join("\n") + "\n"
}

/// Render only the version groups, as used by `vsclean list`.
pub fn render_groups(
    groups: &[GroupSummary],
    server_root: &Path,
    binaries_dir: Option<&Path>,
) -> String {
    let lines = group_lines(groups, server_root, binaries_dir);
    if lines.is_empty() {
        return "No server versions or extensions found.\n".to_string();
    }
    lines.join("\n") + "\n"
}

fn group_lines(
    groups: &[GroupSummary],
    server_root: &Path,
    binaries_dir: Option<&Path>,
) -> Vec<String> {
    let mut lines = Vec::new();

    for group in groups.iter().filter(|g| g.kind == GroupKind::Server) {
        let location = binaries_dir
            .map(|dir| format!(", {}", make_relative(dir, server_root)))
            .unwrap_or_default();
        lines.push(format!("Server versions ({} found{}):", group.total, location));
        lines.extend(version_lines(group, "  "));
        lines.push(String::new());
    }

    let extensions: Vec<_> = groups
        .iter()
        .filter(|g| g.kind == GroupKind::Extension)
        .collect();
    if !extensions.is_empty() {
        lines.push(format!("Extensions ({} installed):", extensions.len()));
        for group in extensions {
            if group.removed.is_empty() {
                lines.push(format!(
                    "  {} {}: single version, no cleanup needed",
                    group.group_key, group.kept.identity
                ));
            } else {
                lines.push(format!("  {} ({} versions):", group.group_key, group.total));
                lines.extend(version_lines(group, "    "));
            }
        }
        lines.push(String::new());
    }

    lines
}

fn version_lines(group: &GroupSummary, indent: &str) -> Vec<String> {
    std::iter::once(("keep  ", &group.kept))
        .chain(group.removed.iter().map(|v| ("remove", v)))
        .map(|(action, version)| {
            format!(
                "{}{} {}  ({})",
                indent,
                action,
                version.name,
                version.modified_at.format("%Y-%m-%d %H:%M:%S UTC")
            )
        })
        .collect()
}

fn outcome_line(outcome: &TaskOutcome, server_root: &Path) -> String {
    let action = match outcome.status {
        OutcomeStatus::Removed => "removed",
        OutcomeStatus::Previewed => "would remove",
        OutcomeStatus::Denied { .. } => "denied",
        OutcomeStatus::Failed { .. } => "failed",
    };
    let kind = format!("[{}]", outcome.kind);
    let rel_path = make_relative(&outcome.path, server_root);

    match outcome.error() {
        Some(error) => format!("{:<13} {:<12} {}: {}", action, kind, rel_path, error),
        None => format!("{:<13} {:<12} {}", action, kind, rel_path),
    }
}

/// Render scan warnings as a trailing section; empty when there are none.
pub fn render_warnings(warnings: &[String]) -> String {
    let mut lines = Vec::new();
    push_messages(&mut lines, "Warnings", warnings);
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

fn push_messages(lines: &mut Vec<String>, title: &str, messages: &[String]) {
    if messages.is_empty() {
        return;
    }
    lines.push(format!("{}:", title));
    for message in messages {
        lines.push(format!("  - {}", message));
    }
    lines.push(String::new());
}

/// Make a path relative to the server root for display.
pub fn make_relative(path: &Path, server_root: &Path) -> String {
    path.strip_prefix(server_root)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}
