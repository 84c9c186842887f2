//! # Cardz Architecture
//!
//! Cardz is a **UI-agnostic scheduling library** for filename-encoded
//! flashcards. The CLI binary is a thin client; everything it does is
//! available as a library call.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses flags, renders messages, launches the viewer      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure scheduling logic over codec/scan/scheduler/register │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract CardStore trait                                 │
//! │  - DirStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Lives in Filenames
//!
//! A card file is named `<awake>-<sleep>-<title>.pdf`, where both stamps are
//! twelve zero-padded digits of Unix seconds. The directory listing is the
//! whole database; a review is a single rename. [`codec`] is the only module
//! that knows this grammar.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments, including `now`, so every
//!   scheduling decision is reproducible in tests
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** spawns the viewer; that capability is wired in by the binary
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each CLI mode
//! - [`codec`]: The filename grammar, encode and decode
//! - [`scan`]: Partition a directory listing into review candidates
//! - [`scheduler`]: Card selection and the next-due-time law
//! - [`register`]: The single active-card marker
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Card`, `Outcome`, `Policy`)
//! - [`config`]: The policy knob file
//! - [`viewer`]: External PDF viewer capability
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod register;
pub mod scan;
pub mod scheduler;
pub mod store;
pub mod viewer;
