// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Plain git commands used while materializing a bridge.
//!
//! Every name and message is its own argv entry; nothing here is ever
//! joined into a shell string.

use std::path::Path;

use super::svn::REF_PREFIX;
use crate::core::process::{ProcessBuilder, ProcessRunner};
use crate::error::MigrationResult;

fn git() -> ProcessBuilder {
    ProcessBuilder::new("git")
}

/// `git checkout -b <name> svn/<name>`
#[must_use]
pub fn checkout_new_branch(name: &str) -> ProcessBuilder {
    git().args(["checkout", "-b", name]).arg(format!("{REF_PREFIX}{name}"))
}

/// `git checkout <name>`
#[must_use]
pub fn checkout(name: &str) -> ProcessBuilder {
    git().args(["checkout", name])
}

/// `git tag -a -m <message> <name> remotes/svn/tags/<name>`
///
/// An empty message falls back to the tag name, since `git tag -a` rejects
/// an empty annotation.
#[must_use]
pub fn annotated_tag(name: &str, message: &str) -> ProcessBuilder {
    let message = if message.trim().is_empty() { name } else { message };
    git()
        .args(["tag", "-a", "-m", message, name])
        .arg(format!("remotes/{REF_PREFIX}tags/{name}"))
}

/// `git remote`
#[must_use]
pub fn list_remotes() -> ProcessBuilder {
    git().arg("remote")
}

/// `git remote add <name> <url>`
#[must_use]
pub fn add_remote(name: &str, url: &str) -> ProcessBuilder {
    git().args(["remote", "add", name, url])
}

/// `git push <remote> --all`
#[must_use]
pub fn push_all(remote: &str) -> ProcessBuilder {
    git().args(["push", remote, "--all"])
}

/// `git push <remote> --tags`
#[must_use]
pub fn push_tags(remote: &str) -> ProcessBuilder {
    git().args(["push", remote, "--tags"])
}

/// Check whether `git remote` lists `name` in the repository at `path`.
///
/// # Errors
///
/// Returns the runner's error if `git remote` fails; a failure is never
/// read as "no such remote".
pub async fn has_remote<R: ProcessRunner + ?Sized>(
    runner: &R,
    path: &Path,
    name: &str,
) -> MigrationResult<bool> {
    let lines = runner.run(list_remotes(), Some(path)).await?;
    Ok(lines.iter().any(|line| line.trim() == name))
}

/// Push all branches, then all tags, to `remote`.
///
/// Both pushes run with inherited stdio so credential prompts and progress
/// reach the user.
///
/// # Errors
///
/// Returns the runner's error if either push fails.
pub async fn push<R: ProcessRunner + ?Sized>(
    runner: &R,
    path: &Path,
    remote: &str,
) -> MigrationResult<()> {
    runner.run_interactive(push_all(remote), Some(path)).await?;
    runner.run_interactive(push_tags(remote), Some(path)).await?;
    Ok(())
}
