// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for svn2git-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. svn2git.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. SVN2GIT_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SVN2GIT_PROCESS__TIMEOUT_SECS=60    → process.timeout_secs = 60
//! SVN2GIT_MIGRATE__MAIN_BRANCH=trunk  → migrate.main_branch = "trunk"
//! SVN2GIT_GLOBAL__LOG_FILE=run.log    → global.log_file = "run.log"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

pub use loader::{ConfigLoader, ConfigSource};
pub use types::{GlobalConfig, MigrateConfig, ProcessConfig};

/// Configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "svn2git.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SVN2GIT";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Defaults for `migrate` and `update`.
    pub migrate: MigrateConfig,
    /// External process policy.
    pub process: ProcessConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use svn2git::config::Config;
    ///
    /// let config = Config::builder()
    ///     .local(".")
    ///     .env()
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().inline(content).build()
    }

    /// Rejects values that would produce broken git invocations.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let names = [
            ("main_branch", &self.migrate.main_branch),
            ("remote_name", &self.migrate.remote_name),
            ("placeholder_filename", &self.migrate.placeholder_filename),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(invalid("migrate", key, "must not be empty"));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(invalid("migrate", key, "must not contain whitespace"));
            }
        }
        if self.migrate.workdir.as_os_str().is_empty() {
            return Err(invalid("migrate", "workdir", "must not be empty"));
        }
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_migrate_options(&mut options);
        self.format_process_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            optional_path(self.global.log_file.as_deref()),
        );
        let format = match self.global.log_format {
            crate::logging::LogFormat::Text => "text",
            crate::logging::LogFormat::Json => "json",
        };
        options.insert("global.log_format".into(), format.into());
        options.insert(
            "global.show_timestamps".into(),
            self.global.show_timestamps.to_string(),
        );
    }

    fn format_migrate_options(&self, options: &mut BTreeMap<String, String>) {
        let migrate = &self.migrate;
        options.insert(
            "migrate.workdir".into(),
            migrate.workdir.display().to_string(),
        );
        options.insert("migrate.main_branch".into(), migrate.main_branch.clone());
        options.insert("migrate.remote_name".into(), migrate.remote_name.clone());
        options.insert(
            "migrate.placeholder_filename".into(),
            migrate.placeholder_filename.clone(),
        );
        options.insert(
            "migrate.authors_file".into(),
            optional_path(migrate.authors_file.as_deref()),
        );
        options.insert("migrate.quiet".into(), migrate.quiet.to_string());
    }

    fn format_process_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "process.trust_exit_codes".into(),
            self.process.trust_exit_codes.to_string(),
        );
        options.insert(
            "process.timeout_secs".into(),
            self.process.timeout_secs.to_string(),
        );
        options.insert(
            "process.interactive_timeout_secs".into(),
            self.process.interactive_timeout_secs.to_string(),
        );
    }
}

fn optional_path(path: Option<&Path>) -> String {
    path.map_or_else(|| "(unset)".to_string(), |p| p.display().to_string())
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
