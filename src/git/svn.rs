// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git svn` command construction.
//!
//! ```text
//! SvnClone { url, destination, layout, authors, placeholder, quiet }
//!   .command() --> git svn clone <url> --prefix=svn/ [layout] [-A f]
//!                  [--preserve-empty-dirs --placeholder-filename=x]
//!                  [--quiet] <dest>
//! fetch()      --> git svn fetch
//! rebase()     --> git svn rebase
//! ```

use serde::Serialize;
use std::path::Path;

use crate::core::process::ProcessBuilder;

/// Prefix for the remote refs git-svn creates.
pub const REF_PREFIX: &str = "svn/";

/// Where trunk, branches and tags live in the Subversion repository.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Layout {
    /// `trunk/`, `branches/`, `tags/`
    #[default]
    Standard,
    /// Explicit sub-paths; `None` leaves that part out.
    Custom {
        trunk: Option<String>,
        branches: Option<String>,
        tags: Option<String>,
    },
}

impl Layout {
    /// Builds a layout from explicit paths, falling back to the standard
    /// layout when none is given.
    #[must_use]
    pub fn from_paths(
        trunk: Option<String>,
        branches: Option<String>,
        tags: Option<String>,
    ) -> Self {
        if trunk.is_none() && branches.is_none() && tags.is_none() {
            Self::Standard
        } else {
            Self::Custom {
                trunk,
                branches,
                tags,
            }
        }
    }

    /// Returns the `git svn clone` arguments for this layout.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Standard => vec!["--stdlayout".to_string()],
            Self::Custom {
                trunk,
                branches,
                tags,
            } => [("--trunk", trunk), ("--branches", branches), ("--tags", tags)]
                .into_iter()
                .filter_map(|(flag, path)| path.as_ref().map(|p| format!("{flag}={p}")))
                .collect(),
        }
    }
}

/// Parameters of an initial `git svn clone`.
#[derive(Debug, Clone, bon::Builder)]
pub struct SvnClone<'a> {
    url: &'a str,
    destination: &'a Path,
    #[builder(default)]
    layout: Layout,
    authors_file: Option<&'a Path>,
    /// Placeholder filename when empty directories are preserved.
    placeholder: Option<&'a str>,
    #[builder(default)]
    quiet: bool,
}

impl SvnClone<'_> {
    /// Builds the clone command.
    #[must_use]
    pub fn command(&self) -> ProcessBuilder {
        let mut cmd = ProcessBuilder::new("git")
            .args(["svn", "clone", self.url])
            .arg(format!("--prefix={REF_PREFIX}"))
            .args(self.layout.args());

        if let Some(authors) = self.authors_file {
            cmd = cmd.arg("-A").arg(authors);
        }

        if let Some(placeholder) = self.placeholder {
            cmd = cmd
                .arg("--preserve-empty-dirs")
                .arg(format!("--placeholder-filename={placeholder}"));
        }

        if self.quiet {
            cmd = cmd.arg("--quiet");
        }

        // destination always goes last
        cmd.arg(self.destination)
    }
}

/// `git svn fetch`
#[must_use]
pub fn fetch() -> ProcessBuilder {
    ProcessBuilder::new("git").args(["svn", "fetch"])
}

/// `git svn rebase`
#[must_use]
pub fn rebase() -> ProcessBuilder {
    ProcessBuilder::new("git").args(["svn", "rebase"])
}
