// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Migrate command implementation.

use anyhow::{Context, bail};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::build_runner;
use crate::cli::migrate::MigrateArgs;
use crate::config::Config;
use crate::core::process::ProcessBuilder;
use crate::error::Result;
use crate::git::svn::Layout;
use crate::migrate::{Gate, MigrationConfig, MigrationOrchestrator, StdinPrompt};

/// Name used for the bridge when the URL has no usable last segment.
const FALLBACK_REPO_NAME: &str = "repository";

/// Main handler for the migrate command.
///
/// # Errors
///
/// Returns an error if `git` is missing, the authors file does not exist,
/// or the clone, fetch, rebase, push or final checkout fails.
pub async fn run_migrate_command(
    args: &MigrateArgs,
    config: &Config,
    token: CancellationToken,
) -> Result<()> {
    ProcessBuilder::require(["git"])?;

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let migration = migration_config(args, config, &cwd)?;

    let runner = build_runner(config, token);
    let mut orchestrator = MigrationOrchestrator::new(&runner, &StdinPrompt, &migration);
    let result = orchestrator.run().await;
    let summary = result
        .with_context(|| format!("migration stopped after state '{}'", orchestrator.state()))?;

    summary.log();

    if let Some(report) = &args.report {
        summary
            .write_report(report)
            .with_context(|| format!("failed to write report {}", report.display()))?;
        info!(report = %report.display(), "wrote migration report");
    }
    Ok(())
}

/// Resolves arguments and configuration into one migration.
///
/// # Errors
///
/// Returns an error if the authors file does not exist.
pub fn migration_config(args: &MigrateArgs, config: &Config, cwd: &Path) -> Result<MigrationConfig> {
    let authors_file = args
        .authors_file
        .clone()
        .or_else(|| config.migrate.authors_file.clone());
    if let Some(file) = &authors_file
        && !file.is_file()
    {
        bail!("authors file not found: {}", file.display());
    }

    let destination = args
        .destination
        .clone()
        .unwrap_or_else(|| default_destination(cwd, &config.migrate.workdir, &args.source));

    let layout = if args.stdlayout {
        Layout::Standard
    } else {
        Layout::from_paths(args.trunk.clone(), args.branches.clone(), args.tags.clone())
    };

    let placeholder = args.preserve_empty_dirs.then(|| {
        args.placeholder_filename
            .clone()
            .unwrap_or_else(|| config.migrate.placeholder_filename.clone())
    });

    Ok(MigrationConfig::builder()
        .source(args.source.as_str())
        .destination(destination)
        .maybe_authors_file(authors_file)
        .maybe_remote_url(args.remote.clone())
        .layout(layout)
        .maybe_placeholder(placeholder)
        .main_branch(config.migrate.main_branch.as_str())
        .remote_name(config.migrate.remote_name.as_str())
        .quiet(config.migrate.quiet)
        .branches(gate(args.yes, args.skip_branches))
        .tags(gate(args.yes, args.skip_tags))
        .push(gate(args.yes, args.no_push))
        .build())
}

/// `<cwd>/<workdir>/<last segment of the URL>`.
#[must_use]
pub fn default_destination(cwd: &Path, workdir: &Path, source: &str) -> PathBuf {
    let name = source
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.ends_with(':'))
        .unwrap_or(FALLBACK_REPO_NAME);
    cwd.join(workdir).join(name)
}

const fn gate(yes: bool, skip: bool) -> Gate {
    if skip {
        Gate::Never
    } else if yes {
        Gate::Always
    } else {
        Gate::Ask
    }
}
