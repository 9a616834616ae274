// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `update` command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `update` command.
#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    /// Path of the git-svn bridge.
    #[arg(value_name = "GITSVN_PATH")]
    pub path: PathBuf,

    /// Branches to rebase; defaults to the checked-out branch.
    #[arg(long = "branches", value_name = "NAME", num_args = 1..)]
    pub branches: Vec<String>,

    /// Do not push to the remote.
    #[arg(long = "no-push")]
    pub no_push: bool,
}
