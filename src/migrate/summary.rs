// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-item outcomes and the aggregated run summary.

use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use super::state::MigrationState;
use crate::error::{MigrationResult, Svn2GitError};

/// Result of one batch item (a branch, a tag, a remote, a branch update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOutcome {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ItemOutcome {
    #[must_use]
    pub fn ok(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(name: impl Into<String>, error: &Svn2GitError) -> Self {
        Self {
            name: name.into(),
            error: Some(error.to_string()),
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// How the bridge was brought up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeAction {
    Cloned,
    Updated,
}

/// Everything a `migrate` run did.
///
/// `None` for branches, tags or remote means the phase did not run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MigrationSummary {
    pub source: String,
    pub destination: String,
    pub state: MigrationState,
    pub bridge: Option<BridgeAction>,
    pub branches: Option<Vec<ItemOutcome>>,
    pub tags: Option<Vec<ItemOutcome>>,
    pub remote: Option<ItemOutcome>,
    pub pushed: bool,
    pub warnings: Vec<String>,
}

impl MigrationSummary {
    /// Returns every failed item across all phases.
    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.branches
            .iter()
            .flatten()
            .chain(self.tags.iter().flatten())
            .chain(self.remote.iter())
            .filter(|outcome| !outcome.is_ok())
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Logs a short recap of the run.
    pub fn log(&self) {
        let count = |items: &Option<Vec<ItemOutcome>>| {
            items.as_ref().map_or((0, 0), |items| {
                let ok = items.iter().filter(|i| i.is_ok()).count();
                (ok, items.len() - ok)
            })
        };
        let (branches_ok, branches_failed) = count(&self.branches);
        let (tags_ok, tags_failed) = count(&self.tags);

        info!(
            destination = %self.destination,
            state = %self.state,
            branches = branches_ok,
            tags = tags_ok,
            pushed = self.pushed,
            "migration finished"
        );
        if branches_failed + tags_failed > 0 {
            warn!(
                branches = branches_failed,
                tags = tags_failed,
                "some items could not be created"
            );
        }
    }

    /// Writes the summary as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write_report(&self, path: &Path) -> MigrationResult<()> {
        write_json(self, path)
    }
}

/// Everything an `update` run did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSummary {
    pub path: String,
    pub branches: Vec<ItemOutcome>,
    pub pushed: bool,
    pub warnings: Vec<String>,
}

impl UpdateSummary {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.branches.iter().any(|b| !b.is_ok())
    }
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> MigrationResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Svn2GitError::Other(format!("failed to serialize report: {e}").into()))?;
    std::fs::write(path, json + "\n")?;
    Ok(())
}
