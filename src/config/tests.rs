// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, ConfigSource};
use crate::logging::{LogFormat, LogLevel};
use insta::assert_snapshot;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.migrate.workdir, PathBuf::from("tmp"));
    assert_eq!(config.migrate.main_branch, "master");
    assert_eq!(config.migrate.remote_name, "origin");
    assert_eq!(config.migrate.placeholder_filename, ".gitkeep");
    assert!(config.migrate.quiet);
    assert!(config.process.trust_exit_codes);
    assert_eq!(config.process.timeout(), Some(Duration::from_secs(300)));
    assert_eq!(config.process.interactive_timeout(), None);
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 4
log_file = "migration.log"
log_format = "json"

[migrate]
workdir = "bridges"
main_branch = "trunk"
quiet = false

[process]
trust_exit_codes = false
timeout_secs = 0
interactive_timeout_secs = 3600
"#,
    )
    .expect("valid config");

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("migration.log")));
    assert_eq!(config.global.log_format, LogFormat::Json);
    assert_eq!(config.migrate.workdir, PathBuf::from("bridges"));
    assert_eq!(config.migrate.main_branch, "trunk");
    assert_eq!(config.migrate.remote_name, "origin");
    assert!(!config.migrate.quiet);
    assert!(!config.process.trust_exit_codes);
    assert_eq!(config.process.timeout(), None);
    assert_eq!(
        config.process.interactive_timeout(),
        Some(Duration::from_secs(3600))
    );
}

#[test]
fn test_unknown_field_rejected() {
    let result = Config::parse("[migrate]\nmain = \"trunk\"\n");
    assert!(result.is_err());
}

#[test]
fn test_log_level_out_of_range_rejected() {
    let result = Config::parse("[global]\noutput_log_level = 9\n");
    assert!(result.is_err());
}

#[test]
fn test_empty_main_branch_rejected() {
    let err = Config::parse("[migrate]\nmain_branch = \"\"\n").expect_err("empty branch");
    assert_snapshot!(
        format!("{err:#}"),
        @"invalid value for 'main_branch' in section '[migrate]': must not be empty"
    );
}

#[test]
fn test_remote_name_with_space_rejected() {
    let err = Config::parse("[migrate]\nremote_name = \"my remote\"\n").expect_err("space");
    assert!(format!("{err:#}").contains("must not contain whitespace"));
}

#[test]
fn test_later_sources_override() {
    let config = ConfigLoader::new()
        .inline("[migrate]\nmain_branch = \"trunk\"\nremote_name = \"upstream\"\n")
        .inline("[migrate]\nmain_branch = \"main\"\n")
        .build()
        .expect("valid config");
    assert_eq!(config.migrate.main_branch, "main");
    assert_eq!(config.migrate.remote_name, "upstream");
}

#[test]
fn test_overrides_win() {
    let config = ConfigLoader::new()
        .inline("[process]\ntimeout_secs = 10\n")
        .overrides([("process.timeout_secs", config::Value::from(42_i64))])
        .expect("valid key")
        .build()
        .expect("valid config");
    assert_eq!(config.process.timeout_secs, 42);
}

#[test]
fn test_missing_local_file_is_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let loader = ConfigLoader::new().local(dir.path());
    assert!(loader.sources().is_empty());
    let config = loader.build().expect("defaults");
    assert_eq!(config.migrate.main_branch, "master");
}

#[test]
fn test_required_missing_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = Config::from_file(dir.path().join("missing.toml"));
    assert!(result.is_err());
}

#[test]
fn test_local_file_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("svn2git.toml");
    std::fs::write(&path, "[migrate]\nremote_name = \"upstream\"\n").expect("write config");

    let loader = ConfigLoader::new().local(dir.path());
    assert_eq!(loader.sources(), [ConfigSource::Local(path)]);
    let config = loader.build().expect("valid config");
    assert_eq!(config.migrate.remote_name, "upstream");
}

#[test]
fn test_sources_keep_priority_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let local = dir.path().join("svn2git.toml");
    let extra = dir.path().join("extra.toml");
    std::fs::write(&local, "").expect("write local");
    std::fs::write(&extra, "").expect("write extra");

    let loader = ConfigLoader::new()
        .local(dir.path())
        .file(&extra)
        .inline("");
    let lines: Vec<String> = loader.sources().iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        [
            format!("[local] {}", local.display()),
            format!("[file] {}", extra.display()),
            "[inline] <string>".to_string(),
        ]
    );
}

#[test]
fn test_invalid_override_value_fails_build() {
    let result = ConfigLoader::new()
        .overrides([("process.timeout_secs", config::Value::from("soon"))])
        .expect("key accepted")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_format_options() {
    let config = Config::default();
    assert_snapshot!(config.format_options().join("\n"), @r"
    global.file_log_level            = 5
    global.log_file                  = (unset)
    global.log_format                = text
    global.output_log_level          = 3
    global.show_timestamps           = false
    migrate.authors_file             = (unset)
    migrate.main_branch              = master
    migrate.placeholder_filename     = .gitkeep
    migrate.quiet                    = true
    migrate.remote_name              = origin
    migrate.workdir                  = tmp
    process.interactive_timeout_secs = 0
    process.timeout_secs             = 300
    process.trust_exit_codes         = true
    ");
}
