// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!           Svn2GitError (~24 bytes)
//!                  |
//!   +-------+------+------+------+------+
//!   |       |      |      |      |      |
//!   v       v      v      v      v      v
//! Bailed Process  Git   Config   Io   Other
//!          Box    Box    Box    Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Process  ExecutableNotFound, SpawnFailed, Execution, Timeout, Interrupted
//!   Git      NotARepository, InvalidDestination, Inspect
//!   Config   ParseError, InvalidValue, NotFound
//! ```
//!
//! `ProcessError::Execution` and `ProcessError::Timeout` are the two faces of
//! a failed external command; both carry the captured output.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`Svn2GitError`].
pub type MigrationResult<T> = std::result::Result<T, Svn2GitError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum Svn2GitError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// External process failed.
    #[error("{0}")]
    Process(#[from] Box<ProcessError>),

    /// Git repository error.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl Svn2GitError {
    /// Returns the process error if this is one.
    #[must_use]
    pub fn as_process(&self) -> Option<&ProcessError> {
        match self {
            Self::Process(err) => Some(err),
            _ => None,
        }
    }
}

/// Create a fatal [`Svn2GitError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> Svn2GitError {
    Svn2GitError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for Svn2GitError {
                fn from(err: $error) -> Self {
                    Svn2GitError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    GitError => Git,
    ConfigError => Config,
    std::io::Error => Io,
}

impl From<regex::Error> for Svn2GitError {
    fn from(err: regex::Error) -> Self {
        Self::Other(format!("invalid pattern: {err}").into_boxed_str())
    }
}

// --- Process Errors ---

/// Renders captured output below an error headline.
fn render_output(output: &[String]) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!(":\n{}", output.join("\n"))
    }
}

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a non-zero status while exit codes were trusted.
    #[error("error executing '{command}' ({code}){}", render_output(.output))]
    Execution {
        command: String,
        code: i32,
        output: Vec<String>,
    },

    /// Process exceeded its deadline and was killed.
    #[error("'{command}' timed out after {timeout_secs} seconds{}", render_output(.output))]
    Timeout {
        command: String,
        timeout_secs: u64,
        output: Vec<String>,
    },

    /// Process was interrupted by the user.
    #[error("'{command}' was interrupted")]
    Interrupted { command: String },
}

impl ProcessError {
    /// Returns the command line of a failed execution, if any.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::ExecutableNotFound { .. } => None,
            Self::SpawnFailed { command, .. }
            | Self::Execution { command, .. }
            | Self::Timeout { command, .. }
            | Self::Interrupted { command } => Some(command),
        }
    }

    /// Returns the output captured before the failure.
    #[must_use]
    pub fn output(&self) -> &[String] {
        match self {
            Self::Execution { output, .. } | Self::Timeout { output, .. } => output,
            _ => &[],
        }
    }

    /// Returns true for a non-zero exit or a timeout.
    #[must_use]
    pub const fn is_execution_failure(&self) -> bool {
        matches!(self, Self::Execution { .. } | Self::Timeout { .. })
    }
}

// --- Git Errors ---

/// Git repository errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// A path that must hold a repository does not.
    #[error("given path is not a git repository ({path})")]
    NotARepository { path: String },

    /// The bridge destination exists but cannot hold a clone.
    #[error("invalid destination {path}: {message}")]
    InvalidDestination { path: String, message: String },

    /// Reading repository state failed.
    #[error("failed to inspect repository {path}: {message}")]
    Inspect { path: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}
