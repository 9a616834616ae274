// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for svn2git-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! svn2git [global options] <command>
//! migrate <svn-url> [options]
//! update <gitsvn-path> [--branches NAME...] [--no-push]
//! fetch-svn-authors <svn-url> [-o FILE]
//! options
//! configs
//! version
//! ```

pub mod authors;
pub mod global;
pub mod migrate;
pub mod update;

#[cfg(test)]
mod tests;

use crate::cli::authors::FetchAuthorsArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::migrate::MigrateArgs;
use crate::cli::update::UpdateArgs;
use clap::{Parser, Subcommand};

/// Subversion to Git migration driver.
#[derive(Debug, Parser)]
#[command(
    name = "svn2git",
    author,
    version,
    about = "Subversion to Git migration driver",
    long_about = "svn2git-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Migrates a Subversion repository to Git through a git-svn\n\
                  bridge: clone, turn remote branches and tags into local ones,\n\
                  then push everything to a Git remote.\n\n\
                  `svn2git migrate <url> --remote <git-url>` runs a full\n\
                  migration. Run it again, or use `svn2git update <path>`, to\n\
                  bring the bridge up to date later.",
    after_help = "CONFIGURATION:\n\n\
                  svn2git reads `svn2git.toml` from the current directory when\n\
                  present, then every file given with --config, in order. Values\n\
                  can also be set with SVN2GIT_<SECTION>__<KEY> environment\n\
                  variables, e.g. SVN2GIT_PROCESS__TIMEOUT_SECS=60. Command-line\n\
                  flags win over all of these."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files and `SVN2GIT_*` variables in use.
    Configs,

    /// Migrates a Subversion repository to Git.
    Migrate(MigrateArgs),

    /// Updates an existing git-svn bridge and pushes it.
    Update(UpdateArgs),

    /// Writes an authors file from the Subversion history.
    #[command(name = "fetch-svn-authors")]
    FetchSvnAuthors(FetchAuthorsArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
