//! Implementation of the `vsclean list` command.
//!
//! Shows each version group (server builds, every extension) with the
//! version that would be kept and the ones a cleanup would remove.
//! Read-only: the plan is built but never executed.

use super::clean::{build_cleanup_plan, render_groups, render_warnings, summarize_groups};
use crate::cli::ListArgs;
use crate::config::{Config, RunFlags};
use crate::error::{CleanError, Result};
use tracing::warn;

/// Execute the `vsclean list` command.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    let flags = RunFlags {
        dry_run: true,
        clean_history: false,
    };
    let config = Config::from_env(args.target.ide, args.target.server_dir, flags)?;
    let output = list_output(&config, args.json)?;
    print!("{}", output);
    Ok(())
}

fn list_output(config: &Config, json: bool) -> Result<String> {
    let plan = build_cleanup_plan(config);
    let groups = summarize_groups(&plan);

    if json {
        // JSON on stdout stays a plain group array; warnings go to the log.
        for warning in &plan.warnings {
            warn!("{}", warning);
        }
        let text = serde_json::to_string_pretty(&groups)
            .map_err(|e| CleanError::UserError(format!("failed to serialize groups: {}", e)))?;
        return Ok(text + "\n");
    }

    let mut text = render_groups(&groups, &config.server_root, plan.binaries_dir.as_deref());
    text.push_str(&render_warnings(&plan.warnings));
    Ok(text)
}
