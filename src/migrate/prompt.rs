// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Step confirmation.
//!
//! ```text
//! Gate::Always --> yes
//! Gate::Never  --> no
//! Gate::Ask    --> Prompt::confirm(question, default = yes)
//!                   StdinPrompt: default when stdin is not a terminal
//!                   FixedAnswer: canned answer (--yes, tests)
//! ```

use serde::Serialize;
use std::io::{BufRead, IsTerminal, Write};
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::warn;

/// Asks the operator a yes/no question.
pub trait Prompt: Send + Sync {
    /// Returns the answer, or `default` when there is nobody to ask.
    fn confirm(&self, question: &str, default: bool) -> bool;
}

/// Reads answers from the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn confirm(&self, question: &str, default: bool) -> bool {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            return default;
        }

        let read = || ask(&mut stdin.lock(), &mut std::io::stderr().lock(), question, default);
        // The terminal read blocks; keep it off the async worker
        let answer = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(read)
            }
            _ => read(),
        };
        answer.unwrap_or_else(|e| {
            warn!(error = %e, default, "cannot read answer, using the default");
            default
        })
    }
}

/// Writes `question` with a `[Y/n]` hint to `output` and reads one line from
/// `input`. End of input and unrecognized answers yield `default`.
///
/// # Errors
///
/// Returns the I/O error of the write, flush or read.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> std::io::Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    write!(output, "{question} {hint} ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(parse_answer(&answer).unwrap_or(default))
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Prompt for FixedAnswer {
    fn confirm(&self, _question: &str, _default: bool) -> bool {
        self.0
    }
}

/// Interprets a typed answer; `None` for empty or unrecognized input.
#[must_use]
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Whether a step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    /// Ask the operator, defaulting to yes.
    #[default]
    Ask,
    Always,
    Never,
}

impl Gate {
    /// Resolves the gate, consulting `prompt` only for [`Gate::Ask`].
    pub fn allows<P: Prompt + ?Sized>(self, prompt: &P, question: &str) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Ask => prompt.confirm(question, true),
        }
    }
}
