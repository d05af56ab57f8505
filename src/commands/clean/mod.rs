//! Implementation of the `vsclean clean` command.
//!
//! Cleans a remote-server installation:
//! - Old server builds under `bin/` (or `cli/servers/`), keeping the newest,
//!   together with their launcher and log files in the server root
//! - Older copies of each extension under `extensions/`
//! - Cache directories under `data/`
//! - Edit history under `data/User/History` when `--clean-history` is given
//!
//! # Safety
//!
//! - Every path is checked by `fs::authorize` right before it is removed or
//!   previewed; nothing outside the server root is ever removed
//! - `--dry-run` runs the same checks and removes nothing
//! - Symlinks are removed as links, never followed
//!
//! A failed removal does not stop the run. The command exits non-zero after
//! all tasks were attempted if any of them failed.

mod display;
mod execution;
mod planning;
mod types;


use crate::cli::CleanArgs;
use crate::config::{Config, RunFlags};
use crate::error::{CleanError, Result};
use tracing::info;

pub use display::{render_groups, render_report, render_warnings};
pub use execution::{execute_cleanup, summarize_groups};
pub use planning::build_cleanup_plan;
use types::CleanupReport;

/// Execute the `vsclean clean` command.
///
/// # Behavior
///
/// - Resolves the server root (fatal `ConfigError` if missing or protected)
/// - Plans and runs every task, printing the report as text or JSON
/// - Returns `DeletionFailed` after printing if any removal failed
pub fn cmd_clean(args: CleanArgs) -> Result<()> {
    let flags = RunFlags {
        dry_run: args.dry_run,
        clean_history: args.clean_history,
    };
    let config = Config::from_env(args.target.ide, args.target.server_dir, flags)?;
    info!(root = %config.server_root.display(), dry_run = config.dry_run, "starting cleanup");

    let report = run_cleanup(&config);

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| CleanError::UserError(format!("failed to serialize report: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", render_report(&report));
    }

    if report.has_failures() {
        return Err(CleanError::DeletionFailed(format!(
            "{} of {} task(s) failed",
            report.failed_count(),
            report.outcomes.len()
        )));
    }

    Ok(())
}

/// Plan and execute a cleanup for an already resolved config.
pub fn run_cleanup(config: &Config) -> CleanupReport {
    let plan = build_cleanup_plan(config);
    execute_cleanup(config, &plan)
}
