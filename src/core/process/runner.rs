// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run() / run_with_cancellation(token)
//!              |
//!              v
//!     build_command()
//!     args, cwd, env, stdio
//!              |
//!              v
//!          spawn() --> run_child()
//!              |
//!              v
//!    interrupted? --> ProcessError::Interrupted
//!    timed out?   --> ProcessError::Timeout
//!    exit != 0?   --> ProcessError::Execution
//!    (skip if ALLOW_FAILURE)
//!              |
//!              v
//!       ProcessOutput
//!    { exit_code, lines }
//! ```
//!
//! The child's working directory is set on the spawned command only; the
//! parent process never changes directory.

use std::process::Stdio;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::{MigrationResult, ProcessError};

impl ProcessBuilder {
    /// Spawns and runs the process, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exceeds its timeout.
    /// - The process exits with a non-zero status (and `ALLOW_FAILURE` flag is not set).
    pub async fn run(self) -> MigrationResult<ProcessOutput> {
        self.run_with_cancellation(CancellationToken::new()).await
    }

    /// Spawns and runs the process with cancellation support.
    ///
    /// When the token is cancelled the child is killed and
    /// `ProcessError::Interrupted` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The token is cancelled before or during the run.
    /// - The process exceeds its timeout.
    /// - The process exits with a non-zero status (and `ALLOW_FAILURE` flag is not set).
    pub async fn run_with_cancellation(
        self,
        token: CancellationToken,
    ) -> MigrationResult<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        // Check if already cancelled before spawning
        if token.is_cancelled() {
            return Err(ProcessError::Interrupted { command: cmd_line }.into());
        }

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();
        let mut child = command.spawn().map_err(|source| {
            // A missing cwd also reports NotFound
            let cwd_ok = self.working_dir().is_none_or(|d| d.is_dir());
            if source.kind() == std::io::ErrorKind::NotFound && cwd_ok {
                ProcessError::ExecutableNotFound {
                    name: self.program().display().to_string(),
                }
            } else {
                ProcessError::SpawnFailed {
                    command: cmd_line.clone(),
                    source,
                }
            }
        })?;

        let pid = child.id();
        trace!(process = %name, pid = ?pid, "spawned");

        let output = self.run_child(&name, &mut child, &token).await?;
        self.check_output(&name, cmd_line, output)
    }

    /// Applies the failure policy to a finished process.
    fn check_output(
        &self,
        name: &str,
        command: String,
        output: ProcessOutput,
    ) -> MigrationResult<ProcessOutput> {
        if output.is_interrupted() {
            return Err(ProcessError::Interrupted { command }.into());
        }

        if output.timed_out() {
            let timeout_secs = self.timeout_duration().map_or(0, |d| d.as_secs());
            return Err(ProcessError::Timeout {
                command,
                timeout_secs,
                output: output.into_lines(),
            }
            .into());
        }

        if !output.success() && !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) {
            for line in output.lines() {
                error!(process = %name, "{line}");
            }
            return Err(ProcessError::Execution {
                command,
                code: output.exit_code(),
                output: output.into_lines(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        for (key, value) in self.environment() {
            command.env(key, value);
        }

        if self.process_flags().contains(ProcessFlags::INHERIT_STDIO) {
            command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        } else {
            command
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
        }

        // Kill on drop for safety
        command.kill_on_drop(true);

        command
    }
}
