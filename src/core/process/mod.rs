// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .timeout()
//!   .run() / .run_with_cancellation()
//!       --> tokio::process::Command
//!           interleaved stdout/stderr capture
//!       --> ProcessOutput { exit_code, lines }
//!
//! ProcessRunner (trait) --> SystemRunner
//! ```

pub mod builder;
pub mod executor;
mod io;
#[cfg(test)]
pub(crate) mod mock;
mod runner;

pub use builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
pub use executor::{ProcessRunner, SystemRunner};
