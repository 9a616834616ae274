// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `migrate` workflow.
//!
//! ```text
//! ensure_bridge()   no .git: mkdir + git svn clone  (fatal)
//!                   .git:    git svn fetch + rebase (fatal)
//!        |
//! migrate_branches() gate "Migrate branches?"
//!        |            git branch -rv, then per branch git checkout -b
//! migrate_tags()      gate "Migrate tags?"
//!        |            git branch -rv, then per tag git tag -a
//! configure_remote()  only with a remote URL; git remote add if missing
//! push()              gate "Push to remote?"; --all, --tags (fatal)
//!        |
//! finalize()          git checkout <main branch> (fatal)
//! ```
//!
//! Item failures are recorded in the summary and logged as warnings; the
//! run carries on with the next item.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::prompt::{Gate, Prompt};
use super::state::MigrationState;
use super::summary::{BridgeAction, ItemOutcome, MigrationSummary};
use crate::core::process::ProcessRunner;
use crate::error::{GitError, MigrationResult};
use crate::git::refs::{RefDescriptor, RefLister};
use crate::git::svn::{self, Layout, SvnClone};
use crate::git::{ops, query};

/// Settings of one migration, fixed before it starts.
#[derive(Debug, Clone, bon::Builder, Serialize)]
pub struct MigrationConfig {
    /// Subversion repository URL.
    #[builder(into)]
    source: String,
    /// Path of the git-svn bridge.
    #[builder(into)]
    destination: PathBuf,
    /// Subversion-to-git author mapping passed to `git svn clone -A`.
    #[builder(into)]
    authors_file: Option<PathBuf>,
    /// Git remote to push the result to.
    #[builder(into)]
    remote_url: Option<String>,
    #[builder(default)]
    layout: Layout,
    /// Placeholder filename; set to preserve empty directories.
    #[builder(into)]
    placeholder: Option<String>,
    #[builder(into, default = "master".to_string())]
    main_branch: String,
    #[builder(into, default = "origin".to_string())]
    remote_name: String,
    /// Pass `--quiet` to `git svn clone`.
    #[builder(default = true)]
    quiet: bool,
    #[builder(default)]
    branches: Gate,
    #[builder(default)]
    tags: Gate,
    #[builder(default)]
    push: Gate,
}

impl MigrationConfig {
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    #[must_use]
    pub fn authors_file(&self) -> Option<&Path> {
        self.authors_file.as_deref()
    }

    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        self.remote_url.as_deref()
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    #[must_use]
    pub fn main_branch(&self) -> &str {
        &self.main_branch
    }

    #[must_use]
    pub fn remote_name(&self) -> &str {
        &self.remote_name
    }

    /// Returns the `git svn clone` invocation for this configuration.
    #[must_use]
    pub fn clone_command(&self) -> crate::core::process::ProcessBuilder {
        SvnClone::builder()
            .url(&self.source)
            .destination(&self.destination)
            .layout(self.layout.clone())
            .maybe_authors_file(self.authors_file.as_deref())
            .maybe_placeholder(self.placeholder.as_deref())
            .quiet(self.quiet)
            .build()
            .command()
    }
}

/// Drives one migration through its states.
pub struct MigrationOrchestrator<'a, R: ProcessRunner + ?Sized, P: Prompt + ?Sized> {
    runner: &'a R,
    prompt: &'a P,
    config: &'a MigrationConfig,
    state: MigrationState,
}

impl<'a, R: ProcessRunner + ?Sized, P: Prompt + ?Sized> MigrationOrchestrator<'a, R, P> {
    pub const fn new(runner: &'a R, prompt: &'a P, config: &'a MigrationConfig) -> Self {
        Self {
            runner,
            prompt,
            config,
            state: MigrationState::NotCloned,
        }
    }

    /// Returns the last state reached, also after a failed run.
    #[must_use]
    pub const fn state(&self) -> MigrationState {
        self.state
    }

    fn advance(&mut self, next: MigrationState) {
        debug!(from = %self.state, to = %next, "migration state");
        self.state = next;
    }

    fn bridge(&self) -> &'a Path {
        self.config.destination()
    }

    /// Runs the whole migration.
    ///
    /// # Errors
    ///
    /// Returns an error if the clone, fetch, rebase, push or final checkout
    /// fails. Branch, tag and remote failures are recorded in the summary.
    pub async fn run(&mut self) -> MigrationResult<MigrationSummary> {
        let mut summary = MigrationSummary {
            source: self.config.source().to_string(),
            destination: self.bridge().display().to_string(),
            ..MigrationSummary::default()
        };

        info!(source = %summary.source, bridge = %summary.destination, "starting migration");

        summary.bridge = Some(self.ensure_bridge().await?);
        self.advance(MigrationState::Cloned);

        summary.branches = self.migrate_branches(&mut summary.warnings).await;
        self.advance(MigrationState::BranchesCreated);

        summary.tags = self.migrate_tags(&mut summary.warnings).await;
        self.advance(MigrationState::TagsCreated);

        if let Some(url) = self.config.remote_url() {
            summary.remote = Some(self.configure_remote(url, &mut summary.warnings).await);
            self.advance(MigrationState::RemoteConfigured);

            if self.config.push.allows(self.prompt, "Push to remote?") {
                ops::push(self.runner, self.bridge(), self.config.remote_name()).await?;
                summary.pushed = true;
            }
            self.advance(MigrationState::Pushed);
        }

        self.finalize().await?;
        summary.state = self.state;
        Ok(summary)
    }

    /// Clones a new bridge, or fetches and rebases an existing one.
    async fn ensure_bridge(&self) -> MigrationResult<BridgeAction> {
        let bridge = self.bridge();

        if query::is_git_repo(bridge) {
            info!(bridge = %bridge.display(), "existing git repository found");
            self.runner
                .run_interactive(svn::fetch(), Some(bridge))
                .await?;
            self.runner
                .run_interactive(svn::rebase(), Some(bridge))
                .await?;
            return Ok(BridgeAction::Updated);
        }

        if bridge.exists() && !bridge.is_dir() {
            return Err(GitError::InvalidDestination {
                path: bridge.display().to_string(),
                message: "not a directory".to_string(),
            }
            .into());
        }
        std::fs::create_dir_all(bridge)?;

        info!("cloning subversion repository");
        self.runner
            .run_interactive(self.config.clone_command(), None)
            .await?;
        Ok(BridgeAction::Cloned)
    }

    async fn migrate_branches(&mut self, warnings: &mut Vec<String>) -> Option<Vec<ItemOutcome>> {
        if !self.config.branches.allows(self.prompt, "Migrate branches?") {
            info!("skipping branches");
            return None;
        }

        let lister = RefLister::new(self.runner);
        let branches = self
            .listed(lister.list_branches(self.bridge()).await, "branches", warnings);
        self.advance(MigrationState::BranchesListed);

        let mut outcomes = Vec::with_capacity(branches.len());
        for branch in &branches {
            info!(branch = branch.name(), "creating branch");
            let result = self
                .runner
                .run(ops::checkout_new_branch(branch.name()), Some(self.bridge()))
                .await;
            outcomes.push(record(branch.name(), "create branch", result));
        }
        Some(outcomes)
    }

    async fn migrate_tags(&mut self, warnings: &mut Vec<String>) -> Option<Vec<ItemOutcome>> {
        if !self.config.tags.allows(self.prompt, "Migrate tags?") {
            info!("skipping tags");
            return None;
        }

        let lister = RefLister::new(self.runner);
        let tags = self.listed(lister.list_tags(self.bridge()).await, "tags", warnings);
        self.advance(MigrationState::TagsListed);

        let mut outcomes = Vec::with_capacity(tags.len());
        for tag in &tags {
            info!(tag = tag.name(), "creating tag");
            let result = self
                .runner
                .run(ops::annotated_tag(tag.name(), tag.message()), Some(self.bridge()))
                .await;
            outcomes.push(record(tag.name(), "create tag", result));
        }
        Some(outcomes)
    }

    /// Downgrades a listing failure to a warning and an empty list.
    fn listed(
        &self,
        result: MigrationResult<Vec<RefDescriptor>>,
        what: &str,
        warnings: &mut Vec<String>,
    ) -> Vec<RefDescriptor> {
        match result {
            Ok(refs) => {
                if refs.is_empty() {
                    info!(bridge = %self.bridge().display(), "no {what} found");
                }
                refs
            }
            Err(e) => {
                warn!(error = %e, "failed to list {what}");
                warnings.push(format!("failed to list {what}: {e}"));
                Vec::new()
            }
        }
    }

    async fn configure_remote(&self, url: &str, warnings: &mut Vec<String>) -> ItemOutcome {
        let name = self.config.remote_name();

        match ops::has_remote(self.runner, self.bridge(), name).await {
            Ok(true) => {
                info!(remote = name, "remote already configured");
                return ItemOutcome::ok(name);
            }
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "failed to list remotes");
                warnings.push(format!("failed to list remotes: {e}"));
            }
        }

        info!(remote = name, url, "creating git remote");
        let result = self
            .runner
            .run(ops::add_remote(name, url), Some(self.bridge()))
            .await;
        record(name, "add remote", result)
    }

    async fn finalize(&mut self) -> MigrationResult<()> {
        self.runner
            .run(ops::checkout(self.config.main_branch()), Some(self.bridge()))
            .await?;
        self.advance(MigrationState::Finalized);
        Ok(())
    }
}

/// Turns one item's result into an outcome, logging failures.
pub(crate) fn record<T>(name: &str, action: &str, result: MigrationResult<T>) -> ItemOutcome {
    match result {
        Ok(_) => ItemOutcome::ok(name),
        Err(e) => {
            warn!(name, error = %e, "failed to {action}");
            ItemOutcome::failed(name, &e)
        }
    }
}
