//! # Storage Layer
//!
//! This module defines the storage abstraction for cardz. The [`CardStore`]
//! trait is the repository view of "a directory full of card files": a flat
//! namespace of filenames with rename, existence, and content access, plus
//! the one-line active-card marker.
//!
//! ## Design Rationale
//!
//! The directory listing IS the database: filenames are the only durable
//! schedule state. Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep the scheduling logic **decoupled** from `std::fs` details
//!
//! ## Implementations
//!
//! - [`fs::DirStore`]: Production storage, one working directory
//!   - Card files at depth 1, subdirectories ignored
//!   - Active-card marker in `.cardz-active`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## What the Store Does NOT Do
//!
//! The store knows nothing about the filename grammar, candidate selection,
//! or collision policy. `rename` refuses nothing itself; callers check for
//! collisions first so the error taxonomy stays theirs.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for a card directory.
pub trait CardStore {
    /// All plain-file names in the directory, depth 1, unsorted.
    fn list(&self) -> Result<Vec<String>>;

    /// Whether a file with this name exists.
    fn exists(&self, name: &str) -> bool;

    /// Rename a file. Never overwrites by contract: callers reject
    /// collisions before calling.
    fn rename(&mut self, old: &str, new: &str) -> Result<()>;

    /// Raw file contents, for content hashing on import.
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>>;

    /// Create a file with the given contents.
    fn write_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<()>;

    /// The active-card marker: at most one line. Absent, empty, or
    /// unreadable all read as `None`.
    fn read_marker(&self) -> Result<Option<String>>;

    /// Overwrite the marker. `None` truncates it to empty.
    fn write_marker(&mut self, name: Option<&str>) -> Result<()>;
}
