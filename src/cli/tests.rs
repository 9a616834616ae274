// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

fn migrate_args(args: &[&str]) -> crate::cli::migrate::MigrateArgs {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    match cli.command {
        Some(Command::Migrate(args)) => args,
        other => panic!("expected migrate, got {other:?}"),
    }
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["svn2git", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "svn2git",
        "-l",
        "5",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "--timeout",
        "60",
        "options",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.timeout, Some(60));
}

#[test]
fn test_log_level_out_of_range() {
    let result = Cli::try_parse_from(["svn2git", "-l", "7", "version"]);
    assert!(result.is_err());
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "svn2git",
        "-l",
        "4",
        "--log-file",
        "run.log",
        "--timeout",
        "0",
        "version",
    ])
    .unwrap();
    let keys: Vec<_> = cli
        .global
        .to_config_overrides()
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    insta::assert_debug_snapshot!(keys, @r#"
    [
        "global.output_log_level=4",
        "global.file_log_level=4",
        "global.log_file=run.log",
        "process.timeout_secs=0",
    ]
    "#);
}

#[test]
fn test_parse_migrate_defaults() {
    let args = migrate_args(&["svn2git", "migrate", "https://svn.example.com/repos/project"]);
    assert_eq!(args.source, "https://svn.example.com/repos/project");
    assert!(!args.stdlayout);
    assert!(args.trunk.is_none() && args.branches.is_none() && args.tags.is_none());
    assert!(!args.yes && !args.skip_branches && !args.skip_tags && !args.no_push);
    assert!(args.destination.is_none());
}

#[test]
fn test_parse_migrate_full() {
    let args = migrate_args(&[
        "svn2git",
        "migrate",
        "https://svn.example.com/repos/project",
        "-A",
        "authors.txt",
        "--remote",
        "git@example.com:project.git",
        "-T",
        "main",
        "-b",
        "feature",
        "--preserve-empty-dirs",
        "--placeholder-filename",
        ".keep",
        "-d",
        "bridge",
        "-y",
        "--skip-tags",
        "--report",
        "report.json",
    ]);
    assert_eq!(args.authors_file, Some(PathBuf::from("authors.txt")));
    assert_eq!(args.remote.as_deref(), Some("git@example.com:project.git"));
    assert_eq!(args.trunk.as_deref(), Some("main"));
    assert_eq!(args.branches.as_deref(), Some("feature"));
    assert_eq!(args.tags, None);
    assert!(args.preserve_empty_dirs);
    assert_eq!(args.placeholder_filename.as_deref(), Some(".keep"));
    assert_eq!(args.destination, Some(PathBuf::from("bridge")));
    assert!(args.yes);
    assert!(args.skip_tags);
    assert_eq!(args.report, Some(PathBuf::from("report.json")));
}

#[test]
fn test_stdlayout_conflicts_with_paths() {
    let result = Cli::try_parse_from(["svn2git", "migrate", "svn://host/repo", "-s", "-T", "trunk"]);
    assert!(result.is_err());
}

#[test]
fn test_placeholder_requires_preserve() {
    let result = Cli::try_parse_from([
        "svn2git",
        "migrate",
        "svn://host/repo",
        "--placeholder-filename",
        ".keep",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_update() {
    let cli = Cli::try_parse_from([
        "svn2git",
        "update",
        "tmp/project",
        "--branches",
        "develop",
        "release",
        "--no-push",
    ])
    .unwrap();
    let Some(Command::Update(args)) = cli.command else {
        panic!("expected update");
    };
    assert_eq!(args.path, PathBuf::from("tmp/project"));
    assert_eq!(args.branches, vec!["develop", "release"]);
    assert!(args.no_push);
}

#[test]
fn test_parse_fetch_authors_default_output() {
    let cli = Cli::try_parse_from(["svn2git", "fetch-svn-authors", "svn://host/repo"]).unwrap();
    let Some(Command::FetchSvnAuthors(args)) = cli.command else {
        panic!("expected fetch-svn-authors");
    };
    assert_eq!(args.source, "svn://host/repo");
    assert_eq!(args.output, PathBuf::from("./authors.txt"));
}

#[test]
fn test_missing_source_fails() {
    assert!(Cli::try_parse_from(["svn2git", "migrate"]).is_err());
    assert!(Cli::try_parse_from(["svn2git", "fetch-svn-authors"]).is_err());
}
