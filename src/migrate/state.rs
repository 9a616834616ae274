// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Migration progress.
//!
//! ```text
//! NotCloned -> Cloned -> BranchesListed -> BranchesCreated
//!   -> TagsListed -> TagsCreated -> RemoteConfigured -> Pushed -> Finalized
//! ```
//!
//! Skipped phases are passed through without running anything, so a
//! finished migration always ends in `Finalized`.

use serde::Serialize;
use std::fmt;

/// Phase a migration has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationState {
    #[default]
    NotCloned,
    Cloned,
    BranchesListed,
    BranchesCreated,
    TagsListed,
    TagsCreated,
    RemoteConfigured,
    Pushed,
    Finalized,
}

impl MigrationState {
    /// Returns the snake_case name used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotCloned => "not_cloned",
            Self::Cloned => "cloned",
            Self::BranchesListed => "branches_listed",
            Self::BranchesCreated => "branches_created",
            Self::TagsListed => "tags_listed",
            Self::TagsCreated => "tags_created",
            Self::RemoteConfigured => "remote_configured",
            Self::Pushed => "pushed",
            Self::Finalized => "finalized",
        }
    }
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
