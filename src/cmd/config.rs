// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `options` and `configs`.

use crate::config::{Config, ConfigSource, ENV_PREFIX};

/// Prints every effective option as `key = value`.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Prints the configuration layers in the order they are applied.
pub fn run_configs_command(sources: &[ConfigSource]) {
    for line in describe_layers(sources, std::env::vars()) {
        println!("{line}");
    }
}

/// Numbered file layers followed by the `SVN2GIT_*` variables that are set.
///
/// Values are omitted; only the variable names are listed.
pub fn describe_layers<I>(sources: &[ConfigSource], vars: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut lines = Vec::new();
    if sources.is_empty() {
        lines.push("no configuration files (built-in defaults)".to_string());
    }
    for (i, source) in sources.iter().enumerate() {
        lines.push(format!("{}. {source}", i + 1));
    }

    let prefix = format!("{ENV_PREFIX}_");
    let mut names: Vec<String> = vars
        .into_iter()
        .map(|(name, _)| name)
        .filter(|name| name.starts_with(&prefix) && name.contains("__"))
        .collect();
    names.sort();
    for name in names {
        lines.push(format!("[env] {name}"));
    }
    lines
}
