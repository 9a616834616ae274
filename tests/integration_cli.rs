// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use svn2git::cli::{Cli, Command};

// =============================================================================
// Simple Commands
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["svn2git", "version"]).unwrap();
    insta::assert_debug_snapshot!(cli.command, @r"
    Some(
        Version,
    )
    ");
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["svn2git"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_unknown_command_fails() {
    assert!(Cli::try_parse_from(["svn2git", "build"]).is_err());
}

// =============================================================================
// Migrate Command
// =============================================================================

#[test]
fn cli_migrate_minimal() {
    let cli = Cli::try_parse_from(["svn2git", "migrate", "svn://svn.example.com/project"]).unwrap();
    insta::assert_debug_snapshot!(cli.command, @r#"
    Some(
        Migrate(
            MigrateArgs {
                source: "svn://svn.example.com/project",
                authors_file: None,
                remote: None,
                stdlayout: false,
                trunk: None,
                branches: None,
                tags: None,
                preserve_empty_dirs: false,
                placeholder_filename: None,
                destination: None,
                yes: false,
                skip_branches: false,
                skip_tags: false,
                no_push: false,
                report: None,
            },
        ),
    )
    "#);
}

#[test]
fn cli_migrate_stdlayout_and_remote() {
    let cli = Cli::try_parse_from([
        "svn2git",
        "migrate",
        "svn://svn.example.com/project",
        "-s",
        "--remote",
        "https://git.example.com/project.git",
        "-y",
    ])
    .unwrap();
    let Some(Command::Migrate(args)) = cli.command else {
        panic!("expected migrate");
    };
    assert!(args.stdlayout);
    assert!(args.yes);
    assert_eq!(
        args.remote.as_deref(),
        Some("https://git.example.com/project.git")
    );
}

#[test]
fn cli_migrate_stdlayout_conflicts_with_tags() {
    let result = Cli::try_parse_from([
        "svn2git",
        "migrate",
        "svn://svn.example.com/project",
        "--stdlayout",
        "--tags",
        "releases",
    ]);
    assert!(result.is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_before_subcommand() {
    let cli = Cli::try_parse_from([
        "svn2git",
        "--log-file",
        "update.log",
        "--file-log-level",
        "5",
        "update",
        "tmp/project",
    ])
    .unwrap();
    assert_eq!(cli.global.file_log_level, Some(5));
    assert_eq!(
        cli.global.log_file.as_deref(),
        Some(std::path::Path::new("update.log"))
    );
}
