// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new/which/exists/find
//!  • arg/args/cwd/env/flags/timeout/name
//!  • inherit_stdio
//!
//! ProcessFlags: ALLOW_FAILURE, INHERIT_STDIO, FORWARD_TO_LOG
//! ```
//!
//! A builder always describes a program plus an argument vector. There is no
//! shell in between, so ref names and tag messages travel as single argv
//! entries no matter what characters they contain.

use bitflags::bitflags;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

use crate::error::ProcessError;

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

/// Get the executable cache, initializing if needed.
fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

bitflags! {
    /// Flags controlling process execution behavior.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// Don't fail if the process exits with a non-zero status
        const ALLOW_FAILURE = 0x01;
        /// Inherit stdin/stdout/stderr so the user sees live progress
        const INHERIT_STDIO = 0x02;
        /// Mirror captured lines to the trace log
        const FORWARD_TO_LOG = 0x04;
        /// Captured, but walks the whole history; uses the interactive deadline
        const LONG_RUNNING = 0x08;
    }
}

/// Output from a completed process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    lines: Vec<String>,
    timed_out: bool,
    interrupted: bool,
}

impl ProcessOutput {
    /// Creates a new `ProcessOutput` (for internal use).
    pub(super) const fn new(
        exit_code: i32,
        lines: Vec<String>,
        timed_out: bool,
        interrupted: bool,
    ) -> Self {
        Self {
            exit_code,
            lines,
            timed_out,
            interrupted,
        }
    }

    /// Returns the process exit code (0 = success, -1 = killed).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns captured stdout and stderr lines in arrival order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the output, returning the captured lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Returns whether the process was killed at its deadline.
    #[must_use]
    pub const fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Returns whether the process was interrupted.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0 && !self.timed_out && !self.interrupted
    }
}

/// Builder for configuring and running a process.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    /// Path to the executable
    program: PathBuf,
    /// Command-line arguments
    args: Vec<String>,
    /// Working directory of the child
    cwd: Option<PathBuf>,
    /// Extra environment variables layered on the inherited environment
    envs: Vec<(String, String)>,
    /// Process flags
    flags: ProcessFlags,
    /// Display name for logging
    name: Option<String>,
    /// Deadline for the process
    timeout: Option<Duration>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// The program can be an absolute path, relative path, or just the executable name.
    /// If just a name is given, it will be resolved via PATH when the process is spawned.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            envs: Vec::new(),
            flags: ProcessFlags::empty(),
            name: None,
            timeout: None,
        }
    }

    /// Creates a `ProcessBuilder` after resolving the program via PATH.
    ///
    /// Results are cached for subsequent lookups of the same program.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if the executable is not found in PATH.
    pub fn which(program: &str) -> Result<Self, ProcessError> {
        Self::find(program)
            .map(Self::new)
            .ok_or_else(|| ProcessError::ExecutableNotFound {
                name: program.to_string(),
            })
    }

    /// Checks if an executable exists in PATH.
    #[must_use]
    pub fn exists(program: &str) -> bool {
        Self::find(program).is_some()
    }

    /// Finds the full path to an executable in PATH.
    ///
    /// Results are cached for subsequent lookups.
    /// Returns `None` if the executable is not found.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        // Check cache first (read lock)
        {
            let cache = exe_cache()
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(path) = cache.get(program) {
                return Some(path.clone());
            }
        }

        let path = which::which(program).ok()?;
        exe_cache()
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(program.to_string(), path.clone());
        Some(path)
    }

    /// Fails with `ExecutableNotFound` unless every program is on PATH.
    ///
    /// # Errors
    ///
    /// Returns the first missing program as `ProcessError::ExecutableNotFound`.
    pub fn require<'a>(programs: impl IntoIterator<Item = &'a str>) -> Result<(), ProcessError> {
        for program in programs {
            if !Self::exists(program) {
                return Err(ProcessError::ExecutableNotFound {
                    name: program.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Adds an argument to the command.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
        self
    }

    /// Sets the working directory for the process.
    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets an environment variable for the process.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Sets process flags.
    #[must_use]
    pub const fn flags(mut self, flags: ProcessFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Adds a process flag.
    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Convenience: inherit stdio from the parent.
    #[must_use]
    pub fn inherit_stdio(self) -> Self {
        self.flag(ProcessFlags::INHERIT_STDIO)
    }

    /// Sets a display name for logging.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a deadline for the process.
    #[must_use]
    pub const fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Sets a deadline unless one is already present.
    #[must_use]
    pub const fn default_timeout(mut self, duration: Option<Duration>) -> Self {
        if self.timeout.is_none() {
            self.timeout = duration;
        }
        self
    }

    /// Returns a reference to the program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Returns a slice of the arguments.
    #[must_use]
    pub fn args_slice(&self) -> &[String] {
        &self.args
    }

    /// Returns a reference to the working directory, if set.
    #[must_use]
    pub const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    /// Returns the extra environment variables.
    pub(super) fn environment(&self) -> &[(String, String)] {
        &self.envs
    }

    /// Returns the process flags.
    #[must_use]
    pub const fn process_flags(&self) -> ProcessFlags {
        self.flags
    }

    /// Returns the timeout duration, if set.
    #[must_use]
    pub const fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the display name for this process.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.program.file_stem().map_or_else(
                || "process".to_string(),
                |s| s.to_string_lossy().into_owned(),
            )
        })
    }

    /// Returns the full command line as a string (for logging).
    ///
    /// Arguments containing spaces are wrapped in double quotes.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program.display());
        for arg in &self.args {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }
}
