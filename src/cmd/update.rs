// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Update command implementation.

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::build_runner;
use crate::cli::update::UpdateArgs;
use crate::config::Config;
use crate::core::process::ProcessBuilder;
use crate::error::Result;
use crate::migrate::{BridgeUpdater, UpdateConfig};

/// Main handler for the update command.
///
/// # Errors
///
/// Returns an error if `git` is missing, the path is not a repository, or
/// the fetch, push or final checkout fails.
pub async fn run_update_command(
    args: &UpdateArgs,
    config: &Config,
    token: CancellationToken,
) -> Result<()> {
    ProcessBuilder::require(["git"])?;

    let update = UpdateConfig::builder()
        .path(args.path.clone())
        .branches(args.branches.clone())
        .main_branch(config.migrate.main_branch.as_str())
        .remote_name(config.migrate.remote_name.as_str())
        .push(!args.no_push)
        .build();

    let runner = build_runner(config, token);
    let summary = BridgeUpdater::new(&runner, &update)
        .run()
        .await
        .with_context(|| format!("failed to update {}", args.path.display()))?;

    let failed = summary.branches.iter().filter(|b| !b.is_ok()).count();
    info!(
        path = %summary.path,
        branches = summary.branches.len() - failed,
        pushed = summary.pushed,
        "update finished"
    );
    if summary.has_failures() {
        warn!(branches = failed, "some branches could not be rebased");
    }
    Ok(())
}
