// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The runner seam between workflows and the operating system.
//!
//! ```text
//! ProcessRunner (trait)
//!   run(cmd, cwd)             --> captured lines
//!   run_interactive(cmd, cwd) --> exit code, stdio inherited
//!        |
//!        +-- SystemRunner   spawns real processes
//!        +-- ScriptedRunner (tests) replays canned output
//! ```
//!
//! Workflows hand over a bare [`ProcessBuilder`]; the runner decides the
//! working directory, deadline, failure policy and stdio wiring.

use futures_util::future::BoxFuture;
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::error::MigrationResult;

/// Executes external commands on behalf of the workflows.
pub trait ProcessRunner: Send + Sync {
    /// Runs `command` in `cwd` and returns stdout and stderr lines interleaved.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::Execution` on a non-zero exit when exit codes
    /// are trusted, `ProcessError::Timeout` at the deadline, or a spawn error.
    fn run<'a>(
        &'a self,
        command: ProcessBuilder,
        cwd: Option<&'a Path>,
    ) -> BoxFuture<'a, MigrationResult<Vec<String>>>;

    /// Runs `command` in `cwd` with inherited stdio and returns its exit code.
    ///
    /// # Errors
    ///
    /// Same failure policy as [`ProcessRunner::run`].
    fn run_interactive<'a>(
        &'a self,
        command: ProcessBuilder,
        cwd: Option<&'a Path>,
    ) -> BoxFuture<'a, MigrationResult<i32>>;
}

/// Runner that spawns real child processes.
#[derive(Debug, Clone, bon::Builder)]
pub struct SystemRunner {
    /// Treat a non-zero exit as a failure.
    #[builder(default = true)]
    trust_exit_codes: bool,
    /// Deadline for captured commands.
    timeout: Option<Duration>,
    /// Deadline for interactive commands.
    interactive_timeout: Option<Duration>,
    /// Cancelled on Ctrl-C.
    #[builder(default)]
    token: CancellationToken,
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SystemRunner {
    /// Returns whether non-zero exits are failures.
    #[must_use]
    pub const fn trust_exit_codes(&self) -> bool {
        self.trust_exit_codes
    }

    /// Returns the cancellation token shared with the signal handler.
    #[must_use]
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Applies cwd, deadline, failure policy and stdio wiring.
    fn prepare(
        &self,
        command: ProcessBuilder,
        cwd: Option<&Path>,
        interactive: bool,
    ) -> ProcessBuilder {
        let mut command = match cwd {
            Some(dir) => command.cwd(dir),
            None => command,
        };

        if !self.trust_exit_codes {
            command = command.flag(ProcessFlags::ALLOW_FAILURE);
        }

        if interactive {
            command
                .inherit_stdio()
                .default_timeout(self.interactive_timeout)
        } else {
            if command.display_name() == "git" {
                // Credential prompts cannot be answered on a captured pipe
                command = command.env("GIT_TERMINAL_PROMPT", "0");
            }
            let deadline = if command.process_flags().contains(ProcessFlags::LONG_RUNNING) {
                self.interactive_timeout
            } else {
                self.timeout
            };
            command
                .flag(ProcessFlags::FORWARD_TO_LOG)
                .default_timeout(deadline)
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn run<'a>(
        &'a self,
        command: ProcessBuilder,
        cwd: Option<&'a Path>,
    ) -> BoxFuture<'a, MigrationResult<Vec<String>>> {
        Box::pin(async move {
            let command = self.prepare(command, cwd, false);
            info!("{}", command.command_line());
            let output = command.run_with_cancellation(self.token.clone()).await?;
            Ok(output.into_lines())
        })
    }

    fn run_interactive<'a>(
        &'a self,
        command: ProcessBuilder,
        cwd: Option<&'a Path>,
    ) -> BoxFuture<'a, MigrationResult<i32>> {
        Box::pin(async move {
            let command = self.prepare(command, cwd, true);
            info!("{}", command.command_line());
            let output = command.run_with_cancellation(self.token.clone()).await?;
            Ok(output.exit_code())
        })
    }
}
