// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!          Public API
//!   query.rs  refs.rs  svn.rs  ops.rs
//!      |         |        \      /
//!      v         v         v    v
//!    gix     RefLister   ProcessBuilder
//!  (read)        |        (argv only)
//!                v            |
//!          ProcessRunner <----+
//!        (git CLI, write)
//! ```
//!
//! **`query`** reads repository state in-process with gix.
//! **`refs`** lists and parses the bridge's remote refs.
//! **`svn`** and **`ops`** build `git svn` and plain git commands for a
//! [`ProcessRunner`](crate::core::process::ProcessRunner) to execute.

pub mod ops;
pub mod query;
pub mod refs;
pub mod svn;
