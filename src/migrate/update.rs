// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `update` workflow: bring an existing bridge up to date with
//! Subversion and forward the result to its remote.
//!
//! ```text
//! require_git_repo(path)
//! git svn fetch
//! for branch in branches (default: current branch or main branch)
//!     git checkout <branch>; git svn rebase      (failures recorded)
//! git remote lists <remote> && push enabled
//!     git push <remote> --all; git push <remote> --tags
//! git checkout <main branch>
//! ```

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::orchestrator::record;
use super::summary::{ItemOutcome, UpdateSummary};
use crate::core::process::ProcessRunner;
use crate::error::MigrationResult;
use crate::git::{ops, query, svn};

/// Settings of one `update` run.
#[derive(Debug, Clone, bon::Builder)]
pub struct UpdateConfig {
    /// Path of the git-svn bridge.
    #[builder(into)]
    path: PathBuf,
    /// Branches to rebase; empty means the checked-out branch.
    #[builder(default)]
    branches: Vec<String>,
    #[builder(into, default = "master".to_string())]
    main_branch: String,
    #[builder(into, default = "origin".to_string())]
    remote_name: String,
    #[builder(default = true)]
    push: bool,
}

impl UpdateConfig {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Runs the `update` workflow against one bridge.
pub struct BridgeUpdater<'a, R: ProcessRunner + ?Sized> {
    runner: &'a R,
    config: &'a UpdateConfig,
}

impl<'a, R: ProcessRunner + ?Sized> BridgeUpdater<'a, R> {
    pub const fn new(runner: &'a R, config: &'a UpdateConfig) -> Self {
        Self { runner, config }
    }

    /// Runs the update.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` if the path is not a repository,
    /// or the runner's error if the fetch, push or final checkout fails.
    pub async fn run(&self) -> MigrationResult<UpdateSummary> {
        let path = self.config.path();
        query::require_git_repo(path)?;

        let mut summary = UpdateSummary {
            path: path.display().to_string(),
            ..UpdateSummary::default()
        };

        self.runner.run_interactive(svn::fetch(), Some(path)).await?;

        for branch in self.branches(&mut summary.warnings) {
            info!(branch = %branch, "updating branch");
            let outcome = self.update_branch(&branch).await;
            summary.branches.push(outcome);
        }

        if self.config.push {
            let remote = &self.config.remote_name;
            match ops::has_remote(self.runner, path, remote).await {
                Ok(true) => {
                    ops::push(self.runner, path, remote).await?;
                    summary.pushed = true;
                }
                Ok(false) => {
                    info!(remote = %remote, "remote not configured, not pushing");
                    summary
                        .warnings
                        .push(format!("remote '{remote}' not configured"));
                }
                Err(e) => {
                    warn!(error = %e, "failed to list remotes");
                    summary.warnings.push(format!("failed to list remotes: {e}"));
                }
            }
        }

        self.runner
            .run(ops::checkout(&self.config.main_branch), Some(path))
            .await?;
        Ok(summary)
    }

    /// Requested branches, or the checked-out branch (main when detached).
    fn branches(&self, warnings: &mut Vec<String>) -> Vec<String> {
        if !self.config.branches.is_empty() {
            return self.config.branches.clone();
        }

        match query::current_branch(self.config.path()) {
            Ok(Some(branch)) => vec![branch],
            Ok(None) => vec![self.config.main_branch.clone()],
            Err(e) => {
                warn!(error = %e, "failed to read current branch");
                warnings.push(format!("failed to read current branch: {e}"));
                vec![self.config.main_branch.clone()]
            }
        }
    }

    async fn update_branch(&self, branch: &str) -> ItemOutcome {
        let path = self.config.path();
        if let Err(e) = self.runner.run(ops::checkout(branch), Some(path)).await {
            return record(branch, "check out branch", Err::<(), _>(e));
        }
        let result = self.runner.run_interactive(svn::rebase(), Some(path)).await;
        record(branch, "rebase branch", result)
    }
}
