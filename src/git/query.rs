// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix.
//!
//! ```text
//! query.rs --> gix --> .git/ (no subprocess)
//! ```

use std::path::Path;

use crate::error::{GitError, MigrationResult};

/// Check if `path` itself holds a git work tree.
///
/// Requires a `.git` directory directly inside `path`, so a bridge nested
/// inside some other checkout is not mistaken for an existing bridge.
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    path.join(".git").is_dir() && gix::open(path).is_ok()
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if the repository cannot be opened or HEAD cannot be read.
pub fn current_branch(path: &Path) -> MigrationResult<Option<String>> {
    let inspect = |message: String| GitError::Inspect {
        path: path.display().to_string(),
        message,
    };

    let repo = gix::open(path).map_err(|e| inspect(e.to_string()))?;
    let head = repo.head_name().map_err(|e| inspect(e.to_string()))?;
    Ok(head.map(|name| name.shorten().to_string()))
}

/// Fail with `NotARepository` unless `path` holds a git work tree.
///
/// # Errors
///
/// Returns `GitError::NotARepository` when [`is_git_repo`] is false.
pub fn require_git_repo(path: &Path) -> MigrationResult<()> {
    if is_git_repo(path) {
        Ok(())
    } else {
        Err(GitError::NotARepository {
            path: path.display().to_string(),
        }
        .into())
    }
}
