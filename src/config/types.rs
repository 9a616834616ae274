// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config
//!   [global]   log levels, log file, log format
//!   [migrate]  workdir, main branch, remote name, placeholder, authors file
//!   [process]  trust exit codes, timeouts
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::logging::{LogFormat, LogLevel};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file log when unset.
    pub log_file: Option<PathBuf>,
    /// Line format of the log file.
    pub log_format: LogFormat,
    /// Prefix console lines with a timestamp.
    pub show_timestamps: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_format: LogFormat::Text,
            show_timestamps: false,
        }
    }
}

/// Defaults for the `migrate` and `update` commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrateConfig {
    /// Directory, relative to the working directory, that holds bridges.
    pub workdir: PathBuf,
    /// Branch checked out when a run finishes.
    pub main_branch: String,
    /// Name of the git remote pushed to.
    pub remote_name: String,
    /// Placeholder file used by `--preserve-empty-dirs`.
    pub placeholder_filename: String,
    /// Authors file used when `-A` is not given.
    pub authors_file: Option<PathBuf>,
    /// Pass `--quiet` to `git svn clone`.
    pub quiet: bool,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            workdir: PathBuf::from("tmp"),
            main_branch: "master".to_string(),
            remote_name: "origin".to_string(),
            placeholder_filename: ".gitkeep".to_string(),
            authors_file: None,
            quiet: true,
        }
    }
}

/// External process policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessConfig {
    /// Treat a non-zero exit as a failure.
    pub trust_exit_codes: bool,
    /// Deadline in seconds for captured commands (0 = none).
    pub timeout_secs: u64,
    /// Deadline in seconds for clone, fetch, rebase, push and `svn log` (0 = none).
    pub interactive_timeout_secs: u64,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            trust_exit_codes: true,
            timeout_secs: 300,
            interactive_timeout_secs: 0,
        }
    }
}

impl ProcessConfig {
    /// Deadline for captured commands.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        secs(self.timeout_secs)
    }

    /// Deadline for interactive commands.
    #[must_use]
    pub const fn interactive_timeout(&self) -> Option<Duration> {
        secs(self.interactive_timeout_secs)
    }
}

const fn secs(value: u64) -> Option<Duration> {
    if value == 0 {
        None
    } else {
        Some(Duration::from_secs(value))
    }
}
