//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for every operation, regardless of the UI on top.
//!
//! It dispatches to the right command, holds the store and the policy
//! config, and returns structured `Result<CmdResult>` values. It contains no
//! business logic, no I/O formatting, and no wall clock; `now` always
//! arrives as an argument so callers (and tests) own time.
//!
//! ## Generic Over CardStore
//!
//! `CardzApi<S: CardStore>` works against any storage backend:
//! - Production: `CardzApi<DirStore>`
//! - Testing: `CardzApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::config::CardzConfig;
use crate::error::Result;
use crate::model::{Outcome, Policy};
use crate::store::CardStore;
use std::path::Path;

/// The main API facade for cardz operations.
pub struct CardzApi<S: CardStore> {
    store: S,
    config: CardzConfig,
}

impl<S: CardStore> CardzApi<S> {
    pub fn new(store: S, config: CardzConfig) -> Self {
        Self { store, config }
    }

    /// Pick and register the next card per policy (`-q` / `-Q`).
    pub fn query(&mut self, policy: Policy, now: u64) -> Result<CmdResult> {
        commands::query::run(&mut self.store, policy, self.config.new_first_fallback, now)
    }

    /// Record the outcome for the active card (`-h` / `-m`).
    pub fn record(&mut self, outcome: Outcome, now: u64) -> Result<CmdResult> {
        commands::review::run(&mut self.store, outcome, now)
    }

    /// The printable schedule (`-p`).
    pub fn schedule(&self, now: u64) -> Result<CmdResult> {
        commands::list::run(&self.store, now)
    }

    /// Stamp sentinel timestamps onto plain PDFs (`-a`).
    pub fn stamp_new(&mut self) -> Result<CmdResult> {
        commands::add::run(&mut self.store)
    }

    /// Strip timestamps, restoring bare titles (`-r`).
    pub fn strip(&mut self) -> Result<CmdResult> {
        commands::strip::run(&mut self.store)
    }

    /// Import content-new PDFs from `source` (`-i` / `-I`).
    pub fn import(&mut self, source: &Path, keep_stamps: bool) -> Result<CmdResult> {
        commands::import::run(&mut self.store, source, keep_stamps)
    }
}
