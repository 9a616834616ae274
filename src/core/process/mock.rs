// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted runner for workflow tests.

use futures_util::future::BoxFuture;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::builder::{ProcessBuilder, ProcessFlags};
use super::executor::ProcessRunner;
use crate::error::{MigrationResult, ProcessError};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub(crate) command: String,
    pub(crate) cwd: Option<PathBuf>,
    pub(crate) interactive: bool,
}

#[derive(Debug)]
struct Response {
    prefix: String,
    exit_code: i32,
    lines: Vec<String>,
}

/// Replays canned output keyed by command-line prefix.
///
/// Later registrations win over earlier ones. Unscripted commands succeed
/// with no output.
#[derive(Debug)]
pub(crate) struct ScriptedRunner {
    trust_exit_codes: bool,
    responses: Mutex<Vec<Response>>,
    calls: Mutex<Vec<Call>>,
}

impl Default for ScriptedRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedRunner {
    pub(crate) const fn new() -> Self {
        Self {
            trust_exit_codes: true,
            responses: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn untrusted(mut self) -> Self {
        self.trust_exit_codes = false;
        self
    }

    /// Scripts a successful response.
    pub(crate) fn respond(self, prefix: &str, lines: &[&str]) -> Self {
        self.respond_with(prefix, 0, lines)
    }

    /// Scripts a response with an explicit exit code.
    pub(crate) fn respond_with(self, prefix: &str, exit_code: i32, lines: &[&str]) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(Response {
                prefix: prefix.to_string(),
                exit_code,
                lines: lines.iter().map(ToString::to_string).collect(),
            });
        self
    }

    /// Scripts a failure (exit code 1).
    pub(crate) fn fail(self, prefix: &str, lines: &[&str]) -> Self {
        self.respond_with(prefix, 1, lines)
    }

    /// Returns every recorded invocation in order.
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Returns just the command lines of every invocation.
    pub(crate) fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }

    fn replay(
        &self,
        command: &ProcessBuilder,
        cwd: Option<&Path>,
        interactive: bool,
    ) -> MigrationResult<(i32, Vec<String>)> {
        let command_line = command.command_line();
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(Call {
                command: command_line.clone(),
                cwd: cwd.map(Path::to_path_buf),
                interactive,
            });

        let (exit_code, lines) = self
            .responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .rev()
            .find(|r| command_line.starts_with(&r.prefix))
            .map_or((0, Vec::new()), |r| (r.exit_code, r.lines.clone()));

        let allowed = !self.trust_exit_codes
            || command
                .process_flags()
                .contains(ProcessFlags::ALLOW_FAILURE);
        if exit_code != 0 && !allowed {
            return Err(ProcessError::Execution {
                command: command_line,
                code: exit_code,
                output: lines,
            }
            .into());
        }
        Ok((exit_code, lines))
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run<'a>(
        &'a self,
        command: ProcessBuilder,
        cwd: Option<&'a Path>,
    ) -> BoxFuture<'a, MigrationResult<Vec<String>>> {
        Box::pin(async move { self.replay(&command, cwd, false).map(|(_, lines)| lines) })
    }

    fn run_interactive<'a>(
        &'a self,
        command: ProcessBuilder,
        cwd: Option<&'a Path>,
    ) -> BoxFuture<'a, MigrationResult<i32>> {
        Box::pin(async move { self.replay(&command, cwd, true).map(|(code, _)| code) })
    }
}
