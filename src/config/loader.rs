// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! ConfigLoader::new()
//!   .local(dir)          svn2git.toml, skipped when absent
//!   .file(path)          --config, must exist (repeatable)
//!   .inline(toml)        tests and embedded defaults
//!   .env()               SVN2GIT_<SECTION>__<KEY>
//!   .overrides(cli)      highest priority
//!        |
//!        v
//!   build() --> Config (validated)
//! ```

use anyhow::Context;
use std::fmt;
use std::path::{Path, PathBuf};

use super::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use crate::error::Result;

/// Where a layer of configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `svn2git.toml` found in the working directory.
    Local(PathBuf),
    /// A file named with `--config`.
    File(PathBuf),
    /// TOML passed as a string.
    Inline,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "[local] {}", path.display()),
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::Inline => f.write_str("[inline] <string>"),
        }
    }
}

/// Collects configuration layers, lowest priority first.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    sources: Vec<ConfigSource>,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            sources: Vec::new(),
            env_prefix: None,
        }
    }

    /// Adds `svn2git.toml` from `dir` when it exists.
    #[must_use]
    pub fn local(mut self, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(LOCAL_CONFIG_FILE);
        if path.is_file() {
            self.builder = self.builder.add_source(toml_file(&path));
            self.sources.push(ConfigSource::Local(path));
        }
        self
    }

    /// Adds a file that must exist when `build()` runs.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.builder = self.builder.add_source(toml_file(path));
        self.sources.push(ConfigSource::File(path.to_path_buf()));
        self
    }

    #[must_use]
    pub fn inline(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(config::File::from_str(content, config::FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `SVN2GIT_<SECTION>__<KEY>` variables.
    #[must_use]
    pub fn env(self) -> Self {
        self.env_with_prefix(ENV_PREFIX)
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables.
    #[must_use]
    pub fn env_with_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Applies dotted-key overrides that win over every other layer.
    ///
    /// # Errors
    ///
    /// Returns an error if a key cannot be set.
    pub fn overrides<I>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'static str, config::Value)>,
    {
        for (key, value) in overrides {
            self.builder = self
                .builder
                .set_override(key, value)
                .with_context(|| format!("invalid override for '{key}'"))?;
        }
        Ok(self)
    }

    /// Files and strings added so far, lowest priority first.
    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Merges every layer and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a `--config` file is missing or malformed, an
    /// environment variable or key is unknown, or a value fails validation.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let config: Config = builder
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn toml_file(path: &Path) -> config::File<config::FileSourceFile, config::FileFormat> {
    config::File::from(path)
        .format(config::FileFormat::Toml)
        .required(true)
}
