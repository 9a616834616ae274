// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   migrate, update, authors, config
//! ```

pub mod authors;
pub mod config;
pub mod migrate;
pub mod update;

#[cfg(test)]
mod tests;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::process::SystemRunner;

/// Builds the process runner from the `[process]` section.
#[must_use]
pub fn build_runner(config: &Config, token: CancellationToken) -> SystemRunner {
    SystemRunner::builder()
        .trust_exit_codes(config.process.trust_exit_codes)
        .maybe_timeout(config.process.timeout())
        .maybe_interactive_timeout(config.process.interactive_timeout())
        .token(token)
        .build()
}
