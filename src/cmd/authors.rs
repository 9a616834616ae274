// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Authors command implementation.

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use super::build_runner;
use crate::cli::authors::FetchAuthorsArgs;
use crate::config::Config;
use crate::core::process::ProcessBuilder;
use crate::error::Result;
use crate::svn::authors::fetch_authors;

/// Main handler for the fetch-svn-authors command.
///
/// # Errors
///
/// Returns an error if `svn` is missing, `svn log` fails or the output
/// file cannot be written.
pub async fn run_fetch_authors_command(
    args: &FetchAuthorsArgs,
    config: &Config,
    token: CancellationToken,
) -> Result<()> {
    ProcessBuilder::require(["svn"])?;

    let runner = build_runner(config, token);
    let count = fetch_authors(&runner, &args.source, &args.output)
        .await
        .with_context(|| format!("failed to fetch authors from {}", args.source))?;

    println!("{count} authors written to {}", args.output.display());
    Ok(())
}
