// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote ref discovery in a git-svn bridge.
//!
//! ```text
//! git branch -rv
//!   "  svn/develop      1a2b3c4 Fix build"     --> branch develop
//!   "  svn/tags/v1.0    5e6f7a8 Tag release"   --> tag v1.0
//!   "  svn/trunk        9b0c1d2 Merge"         --> branch trunk
//!          |
//!          v
//!   RefPattern::branches()  drops lines containing "tags"
//!   RefPattern::tags()      keeps only lines containing "tags"
//!          |
//!          v
//!   Vec<RefDescriptor> (listing order, no dedup)
//! ```
//!
//! Lines the pattern does not match are skipped, so parsing never fails on
//! unexpected tool output.

use regex::Regex;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::core::process::{ProcessBuilder, ProcessRunner};
use crate::error::MigrationResult;

/// `svn/<name> <revision> <message>`
const BRANCH_PATTERN: &str = r"^\s*svn/(\S+)\s+([a-z0-9]+)(.*)$";

/// `svn/tags/<name> <revision> <message>`
const TAG_PATTERN: &str = r"^\s*svn/tags/(\S+)\s+([a-z0-9]+)(.*)$";

/// Marker separating tag lines from branch lines.
const TAG_MARKER: &str = "tags";

/// One discovered branch or tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefDescriptor {
    name: String,
    message: String,
    revision: Option<String>,
}

impl RefDescriptor {
    /// Creates a descriptor; the message is trimmed.
    pub fn new(
        name: impl Into<String>,
        message: impl AsRef<str>,
        revision: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.as_ref().trim().to_string(),
            revision,
        }
    }

    /// Ref name without the `svn/` or `svn/tags/` prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last commit subject shown by the listing, possibly empty.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Abbreviated commit hash shown by the listing.
    #[must_use]
    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }
}

/// Which side of the listing a pattern selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    Branch,
    Tag,
}

/// A compiled listing filter plus line pattern.
#[derive(Debug, Clone)]
pub struct RefPattern {
    kind: RefKind,
    regex: Regex,
}

impl RefPattern {
    /// Pattern for branch lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn branches() -> MigrationResult<Self> {
        Self::for_kind(RefKind::Branch)
    }

    /// Pattern for tag lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn tags() -> MigrationResult<Self> {
        Self::for_kind(RefKind::Tag)
    }

    /// Pattern for the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn for_kind(kind: RefKind) -> MigrationResult<Self> {
        let source = match kind {
            RefKind::Branch => BRANCH_PATTERN,
            RefKind::Tag => TAG_PATTERN,
        };
        Ok(Self {
            kind,
            regex: Regex::new(source)?,
        })
    }

    /// Returns the kind this pattern selects.
    #[must_use]
    pub const fn kind(&self) -> RefKind {
        self.kind
    }

    fn selects(&self, line: &str) -> bool {
        let is_tag = line.contains(TAG_MARKER);
        match self.kind {
            RefKind::Branch => !is_tag,
            RefKind::Tag => is_tag,
        }
    }

    /// Parses a single listing line.
    #[must_use]
    pub fn parse_line(&self, line: &str) -> Option<RefDescriptor> {
        if !self.selects(line) {
            return None;
        }
        let caps = self.regex.captures(line)?;
        let message = caps.get(3).map_or("", |m| m.as_str());
        Some(RefDescriptor::new(
            &caps[1],
            message,
            Some(caps[2].to_string()),
        ))
    }

    /// Parses a whole listing, keeping the listing order.
    pub fn parse<I, S>(&self, lines: I) -> Vec<RefDescriptor>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.parse_line(line.as_ref()))
            .collect()
    }
}

/// `git branch -rv`
#[must_use]
pub fn list_remote_branches() -> ProcessBuilder {
    ProcessBuilder::new("git").args(["branch", "-rv"])
}

/// Lists the bridge's svn branches and tags through a runner.
pub struct RefLister<'a, R: ProcessRunner + ?Sized> {
    runner: &'a R,
}

impl<'a, R: ProcessRunner + ?Sized> RefLister<'a, R> {
    pub const fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// Lists refs of one kind in the bridge at `path`.
    ///
    /// # Errors
    ///
    /// Returns the runner's error if `git branch -rv` fails.
    pub async fn list(&self, kind: RefKind, path: &Path) -> MigrationResult<Vec<RefDescriptor>> {
        let pattern = RefPattern::for_kind(kind)?;
        let lines = self.runner.run(list_remote_branches(), Some(path)).await?;
        let refs = pattern.parse(&lines);
        debug!(kind = ?kind, listed = lines.len(), parsed = refs.len(), "parsed remote refs");
        Ok(refs)
    }

    /// Lists svn branches (everything under `svn/` except tags).
    ///
    /// # Errors
    ///
    /// Returns the runner's error if `git branch -rv` fails.
    pub async fn list_branches(&self, path: &Path) -> MigrationResult<Vec<RefDescriptor>> {
        self.list(RefKind::Branch, path).await
    }

    /// Lists svn tags with the `tags/` segment stripped from their names.
    ///
    /// # Errors
    ///
    /// Returns the runner's error if `git branch -rv` fails.
    pub async fn list_tags(&self, path: &Path) -> MigrationResult<Vec<RefDescriptor>> {
        self.list(RefKind::Tag, path).await
    }
}
