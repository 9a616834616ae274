// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `fetch-svn-authors` command arguments.

use clap::Args;
use std::path::PathBuf;

use crate::svn::authors::DEFAULT_AUTHORS_FILE;

/// Arguments for the `fetch-svn-authors` command.
#[derive(Debug, Clone, Args)]
pub struct FetchAuthorsArgs {
    /// URL of the Subversion repository.
    #[arg(value_name = "SVN_URL")]
    pub source: String,

    /// File to write the authors to.
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = DEFAULT_AUTHORS_FILE)]
    pub output: PathBuf,
}
