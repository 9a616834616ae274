// svn2git-rs: Subversion to Git migration driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Migration workflows.
//!
//! ```text
//!                migrate
//!                   |
//!     +--------+----+-----+---------+
//!     |        |          |         |
//!     v        v          v         v
//! orchestrator update   prompt   summary
//!     |        |          |         |
//! MigrationConfig      Gate      ItemOutcome
//! MigrationOrchestrator Prompt   MigrationSummary
//!          BridgeUpdater         UpdateSummary
//!                                (JSON report)
//! ```

pub mod orchestrator;
pub mod prompt;
pub mod state;
pub mod summary;
pub mod update;


pub use orchestrator::{MigrationConfig, MigrationOrchestrator};
pub use prompt::{FixedAnswer, Gate, Prompt, StdinPrompt};
pub use state::MigrationState;
pub use summary::{BridgeAction, ItemOutcome, MigrationSummary, UpdateSummary};
pub use update::{BridgeUpdater, UpdateConfig};
