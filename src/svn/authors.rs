// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Author extraction for `git svn clone -A`.
//!
//! ```text
//! svn log --quiet --non-interactive <url>
//!   ------------------------------------------------------------------------
//!   r42 | alice | 2024-01-02 10:00:00 +0000 (Tue, 02 Jan 2024)
//!   r41 | bob   | 2024-01-01 09:00:00 +0000 (Mon, 01 Jan 2024)
//!        |
//!        v  parse_authors()   unique, sorted
//!   {alice, bob}
//!        |
//!        v  format_authors()
//!   alice = alice <alice>
//!   bob = bob <bob>
//! ```

use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

use crate::core::process::{ProcessBuilder, ProcessFlags, ProcessRunner};
use crate::error::{MigrationResult, Svn2GitError};

/// Default output file of `fetch-svn-authors`.
pub const DEFAULT_AUTHORS_FILE: &str = "./authors.txt";

/// `svn log --quiet --non-interactive <url>`
///
/// Output is captured, so svn must fail rather than prompt for credentials.
/// The log covers every revision and runs under the interactive deadline.
#[must_use]
pub fn log_command(url: &str) -> ProcessBuilder {
    ProcessBuilder::new("svn")
        .args(["log", "--quiet", "--non-interactive", url])
        .flag(ProcessFlags::LONG_RUNNING)
}

/// Returns the author of a revision header line (`r<rev> | <author> | ...`).
fn header_author(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('r')?;
    let mut fields = rest.split('|');
    let revision = fields.next()?.trim();
    if revision.is_empty() || !revision.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let author = fields.next()?.trim();
    (!author.is_empty()).then_some(author)
}

/// Collects the unique authors of an `svn log` listing, sorted ascending.
pub fn parse_authors<I, S>(lines: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| header_author(line.as_ref()).map(str::to_string))
        .collect()
}

/// Renders one `user = user <user>` mapping per author.
#[must_use]
pub fn format_authors(authors: &BTreeSet<String>) -> String {
    authors
        .iter()
        .map(|author| format!("{author} = {author} <{author}>\n"))
        .collect()
}

/// Fetches the authors of the repository at `url` and writes the mapping
/// file to `output`. Returns the number of authors written.
///
/// # Errors
///
/// Returns the runner's error if `svn log` fails, or an I/O error if the
/// file cannot be written.
pub async fn fetch_authors<R: ProcessRunner + ?Sized>(
    runner: &R,
    url: &str,
    output: &Path,
) -> MigrationResult<usize> {
    let lines = runner.run(log_command(url), None).await?;
    let authors = parse_authors(&lines);

    tokio::fs::write(output, format_authors(&authors))
        .await
        .map_err(Svn2GitError::from)?;

    info!(count = authors.len(), file = %output.display(), "wrote authors file");
    Ok(authors.len())
}
