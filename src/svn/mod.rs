// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Subversion-side helpers that talk to the `svn` client directly.
//!
//! ```text
//! authors.rs --> svn log --quiet --non-interactive <url> --> "user = user <user>"
//! ```

pub mod authors;
