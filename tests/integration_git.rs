// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for Git operations.
//!
//! Builds throwaway repositories whose remote refs look like a git-svn
//! bridge (`refs/remotes/svn/...`) and drives the real `git` binary.

use std::fs;
use std::path::Path;
use std::process::Command;

use svn2git::core::process::{ProcessRunner, SystemRunner};
use svn2git::git::ops::{add_remote, annotated_tag, checkout, checkout_new_branch, has_remote};
use svn2git::git::query::{current_branch, is_git_repo, require_git_repo};
use svn2git::git::refs::RefLister;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Helper to run git commands in a directory
fn run_git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .expect("failed to run git");
    assert!(output.status.success(), "git {args:?} failed: {output:?}");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// A repository on branch `work` with one commit and svn-style remote refs
/// for branch `develop` and tag `v1.0`.
fn init_fake_bridge(dir: &Path) {
    run_git(&["init", "-q", "--initial-branch=work"], dir);
    run_git(&["config", "user.email", "test@test.com"], dir);
    run_git(&["config", "user.name", "Test"], dir);
    fs::write(dir.join("README.md"), "# Test").expect("failed to write file");
    run_git(&["add", "."], dir);
    run_git(&["commit", "-q", "-m", "Initial commit"], dir);
    run_git(&["update-ref", "refs/remotes/svn/develop", "HEAD"], dir);
    run_git(&["update-ref", "refs/remotes/svn/tags/v1.0", "HEAD"], dir);
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn git_is_git_repo_true() {
    let temp = temp_dir();
    init_fake_bridge(temp.path());
    assert!(is_git_repo(temp.path()));
    assert!(require_git_repo(temp.path()).is_ok());
}

#[test]
fn git_is_git_repo_false() {
    let temp = temp_dir();
    assert!(!is_git_repo(temp.path()));
    assert!(require_git_repo(temp.path()).is_err());
}

#[test]
fn git_current_branch() {
    let temp = temp_dir();
    init_fake_bridge(temp.path());
    assert_eq!(
        current_branch(temp.path()).expect("readable HEAD"),
        Some("work".to_string())
    );
}

// =============================================================================
// Ref listing
// =============================================================================

#[tokio::test]
async fn git_lists_svn_branches_and_tags() {
    let temp = temp_dir();
    init_fake_bridge(temp.path());
    let runner = SystemRunner::default();
    let lister = RefLister::new(&runner);

    let branches = lister.list_branches(temp.path()).await.expect("listing");
    let names: Vec<_> = branches.iter().map(|b| b.name()).collect();
    assert_eq!(names, ["develop"]);
    assert_eq!(branches[0].message(), "Initial commit");

    let tags = lister.list_tags(temp.path()).await.expect("listing");
    let names: Vec<_> = tags.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["v1.0"]);
    assert!(tags[0].revision().is_some());
}

#[tokio::test]
async fn git_listing_outside_repo_fails() {
    let temp = temp_dir();
    let runner = SystemRunner::default();
    let result = RefLister::new(&runner).list_branches(temp.path()).await;
    assert!(result.is_err());
}

// =============================================================================
// Branch and tag creation
// =============================================================================

#[tokio::test]
async fn git_creates_branch_and_tag_from_svn_refs() {
    let temp = temp_dir();
    init_fake_bridge(temp.path());
    let runner = SystemRunner::default();
    let cwd_before = std::env::current_dir().expect("cwd");

    runner
        .run(checkout_new_branch("develop"), Some(temp.path()))
        .await
        .expect("branch created");
    runner
        .run(annotated_tag("v1.0", ""), Some(temp.path()))
        .await
        .expect("tag created");
    runner
        .run(checkout("work"), Some(temp.path()))
        .await
        .expect("checkout");

    assert_eq!(std::env::current_dir().expect("cwd"), cwd_before);
    assert!(run_git(&["branch", "--list", "develop"], temp.path()).contains("develop"));
    assert_eq!(run_git(&["cat-file", "-t", "v1.0"], temp.path()).trim(), "tag");
    assert_eq!(
        run_git(&["tag", "-l", "-n1", "v1.0"], temp.path())
            .split_whitespace()
            .collect::<Vec<_>>(),
        ["v1.0", "v1.0"]
    );
}

#[tokio::test]
async fn git_existing_branch_fails_with_output() {
    let temp = temp_dir();
    init_fake_bridge(temp.path());
    run_git(&["branch", "develop"], temp.path());
    let runner = SystemRunner::default();

    let err = runner
        .run(checkout_new_branch("develop"), Some(temp.path()))
        .await
        .expect_err("branch already exists");
    let process = err.as_process().expect("process error");
    assert!(process.is_execution_failure());
    assert!(process.output().iter().any(|line| line.contains("already exists")));
}

// =============================================================================
// Remotes
// =============================================================================

#[tokio::test]
async fn git_add_remote_then_has_remote() {
    let temp = temp_dir();
    init_fake_bridge(temp.path());
    let runner = SystemRunner::default();

    assert!(!has_remote(&runner, temp.path(), "origin").await.expect("listing"));
    runner
        .run(
            add_remote("origin", "https://git.example.com/project.git"),
            Some(temp.path()),
        )
        .await
        .expect("remote added");
    assert!(has_remote(&runner, temp.path(), "origin").await.expect("listing"));
}

#[tokio::test]
async fn git_has_remote_outside_repo_fails() {
    let temp = temp_dir();
    let runner = SystemRunner::default();
    assert!(has_remote(&runner, temp.path(), "origin").await.is_err());
}
