// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `migrate` command arguments.
//!
//! ```text
//! migrate <svn-url>
//!   layout     -s | -T/-b/-t      (default: standard layout)
//!   clone      -A FILE, --preserve-empty-dirs, --placeholder-filename
//!   bridge     -d DIR             (default: <cwd>/<workdir>/<repo name>)
//!   steps      -y, --skip-branches, --skip-tags, --no-push
//!   output     --remote URL, --report FILE
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `migrate` command.
#[derive(Debug, Clone, Args)]
pub struct MigrateArgs {
    /// URL of the Subversion repository.
    #[arg(value_name = "SVN_URL")]
    pub source: String,

    /// Authors file mapping Subversion users to git identities.
    #[arg(short = 'A', long = "authors-file", value_name = "FILE")]
    pub authors_file: Option<PathBuf>,

    /// Git remote to push the migrated repository to.
    #[arg(long = "remote", value_name = "URL")]
    pub remote: Option<String>,

    /// The repository uses the standard trunk/branches/tags layout.
    #[arg(short = 's', long = "stdlayout", conflicts_with_all = ["trunk", "branches", "tags"])]
    pub stdlayout: bool,

    /// Path of the trunk, relative to the repository URL.
    #[arg(short = 'T', long = "trunk", value_name = "PATH")]
    pub trunk: Option<String>,

    /// Path of the branches, relative to the repository URL.
    #[arg(short = 'b', long = "branches", value_name = "PATH")]
    pub branches: Option<String>,

    /// Path of the tags, relative to the repository URL.
    #[arg(short = 't', long = "tags", value_name = "PATH")]
    pub tags: Option<String>,

    /// Keep empty Subversion directories by adding a placeholder file.
    #[arg(long = "preserve-empty-dirs")]
    pub preserve_empty_dirs: bool,

    /// Name of the placeholder file used with --preserve-empty-dirs.
    #[arg(long = "placeholder-filename", value_name = "NAME", requires = "preserve_empty_dirs")]
    pub placeholder_filename: Option<String>,

    /// Directory of the git-svn bridge.
    #[arg(short = 'd', long = "destination", value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Answer yes to every question.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Do not create local branches.
    #[arg(long = "skip-branches")]
    pub skip_branches: bool,

    /// Do not create tags.
    #[arg(long = "skip-tags")]
    pub skip_tags: bool,

    /// Configure the remote but do not push.
    #[arg(long = "no-push")]
    pub no_push: bool,

    /// Write a JSON summary of the run to this file.
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,
}
