// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::build_runner;
use super::config::describe_layers;
use super::migrate::{default_destination, migration_config};
use crate::cli::{Cli, Command};
use crate::config::{Config, ConfigSource};
use crate::git::svn::Layout;
use crate::migrate::Gate;
use clap::Parser;

fn parse_migrate(args: &[&str]) -> crate::cli::migrate::MigrateArgs {
    let cli = Cli::try_parse_from(args.iter().copied()).expect("valid arguments");
    match cli.command {
        Some(Command::Migrate(args)) => args,
        other => panic!("expected migrate, got {other:?}"),
    }
}

#[test]
fn test_default_destination_uses_last_segment() {
    let dest = default_destination(
        Path::new("/work"),
        Path::new("tmp"),
        "https://svn.example.com/repos/project/",
    );
    assert_eq!(dest, PathBuf::from("/work/tmp/project"));
}

#[test]
fn test_default_destination_fallback() {
    let dest = default_destination(Path::new("/work"), Path::new("tmp"), "file:///");
    assert_eq!(dest, PathBuf::from("/work/tmp/repository"));
}

#[test]
fn test_migration_config_defaults() {
    let args = parse_migrate(&["svn2git", "migrate", "svn://host/repos/app"]);
    let config = migration_config(&args, &Config::default(), Path::new("/work"))
        .expect("valid migration");

    assert_eq!(config.destination(), Path::new("/work/tmp/app"));
    assert_eq!(config.layout(), &Layout::Standard);
    assert_eq!(config.placeholder(), None);
    assert_eq!(config.main_branch(), "master");
    assert_eq!(config.remote_name(), "origin");
    assert_eq!(config.remote_url(), None);
    assert!(config.clone_command().command_line().ends_with(" --quiet /work/tmp/app"));
}

#[test]
fn test_quiet_can_be_disabled() {
    let args = parse_migrate(&["svn2git", "migrate", "svn://host/repos/app"]);
    let config = Config::parse("[migrate]\nquiet = false\n").expect("valid config");
    let migration = migration_config(&args, &config, Path::new("/work")).expect("valid migration");
    assert!(!migration.clone_command().command_line().contains("--quiet"));
}

#[test]
fn test_migration_config_custom_layout_and_placeholder() {
    let args = parse_migrate(&[
        "svn2git",
        "migrate",
        "svn://host/repos/app",
        "-T",
        "main",
        "--preserve-empty-dirs",
        "-d",
        "/bridges/app",
    ]);
    let config = migration_config(&args, &Config::default(), Path::new("/work"))
        .expect("valid migration");

    assert_eq!(config.destination(), Path::new("/bridges/app"));
    assert_eq!(
        config.layout(),
        &Layout::Custom {
            trunk: Some("main".to_string()),
            branches: None,
            tags: None,
        }
    );
    assert_eq!(config.placeholder(), Some(".gitkeep"));
}

#[test]
fn test_migration_config_gates() {
    let args = parse_migrate(&[
        "svn2git",
        "migrate",
        "svn://host/repo",
        "-y",
        "--skip-tags",
        "--no-push",
    ]);
    let config = migration_config(&args, &Config::default(), Path::new("/work"))
        .expect("valid migration");
    let json = serde_json::to_value(&config).expect("serializable");

    assert_eq!(json["branches"], serde_json::json!(Gate::Always));
    assert_eq!(json["tags"], serde_json::json!(Gate::Never));
    assert_eq!(json["push"], serde_json::json!(Gate::Never));
}

#[test]
fn test_missing_authors_file_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("authors.txt");
    let missing = missing.to_str().expect("utf-8 path");
    let args = parse_migrate(&["svn2git", "migrate", "svn://host/repo", "-A", missing]);

    let err = migration_config(&args, &Config::default(), dir.path()).expect_err("missing file");
    assert!(err.to_string().starts_with("authors file not found"));
}

#[test]
fn test_authors_file_from_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let authors = dir.path().join("authors.txt");
    std::fs::write(&authors, "alice = alice <alice>\n").expect("write authors");

    let mut config = Config::default();
    config.migrate.authors_file = Some(authors.clone());
    let args = parse_migrate(&["svn2git", "migrate", "svn://host/repo"]);

    let migration = migration_config(&args, &config, dir.path()).expect("valid migration");
    assert_eq!(migration.authors_file(), Some(authors.as_path()));
}

#[test]
fn test_build_runner_from_config() {
    let mut config = Config::default();
    config.process.trust_exit_codes = false;
    config.process.timeout_secs = 5;

    let token = CancellationToken::new();
    let runner = build_runner(&config, token.clone());
    assert!(!runner.trust_exit_codes());

    token.cancel();
    assert!(runner.token().is_cancelled());
    assert_eq!(config.process.timeout(), Some(Duration::from_secs(5)));
}

#[test]
fn test_describe_layers_lists_files_then_env() {
    let sources = [
        ConfigSource::Local(PathBuf::from("./svn2git.toml")),
        ConfigSource::File(PathBuf::from("/etc/svn2git/ci.toml")),
    ];
    let vars = [
        ("SVN2GIT_PROCESS__TIMEOUT_SECS", "60"),
        ("PATH", "/usr/bin"),
        ("SVN2GIT_MIGRATE__REMOTE_NAME", "github"),
        ("SVN2GIT_HOME", "/opt"),
    ]
    .map(|(k, v)| (k.to_string(), v.to_string()));

    insta::assert_snapshot!(describe_layers(&sources, vars).join("\n"), @r"
    1. [local] ./svn2git.toml
    2. [file] /etc/svn2git/ci.toml
    [env] SVN2GIT_MIGRATE__REMOTE_NAME
    [env] SVN2GIT_PROCESS__TIMEOUT_SECS
    ");
}

#[test]
fn test_describe_layers_without_files() {
    let lines = describe_layers(&[], std::iter::empty());
    assert_eq!(lines, ["no configuration files (built-in defaults)"]);
}
