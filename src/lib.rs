//! # Repz Architecture
//!
//! Repz is a **UI-agnostic report management library**. This is not a CLI
//! application that happens to have some library code; it's a library that
//! happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - Resolves display indexes (f1, 1) to report ids           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Report Store (reports.rs)                                  │
//! │  - Owns the canonical ordered collection                    │
//! │  - Validates, mutates, records errors, write-through saves  │
//! │  - Gates every mutation on a role capability                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence Layer (store/)                                 │
//! │  - Abstract SnapshotStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! │  - Absorbs and logs every medium failure                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Beside the main path sit three support components: the ordering engine
//! ([`reorder`]) computing single-element splice moves, the autosave
//! scheduler ([`autosave`]) coalescing edit bursts into deferred saves, and
//! the placeholder AI text functions ([`ai`]).
//!
//! ## Key Principle: the process owns the truth
//!
//! The in-memory collection is canonical. Persistence is a write-through,
//! best-effort snapshot of it: a failed write is logged and the session
//! continues; a snapshot that fails to parse degrades to an empty
//! collection instead of refusing to start. Nothing above the persistence
//! layer ever sees a storage error.
//!
//! ## Module Overview
//!
//! - [`model`]: core data types (`Report`, `ReportDraft`, `ReportPatch`)
//! - [`reports`]: the report store, entry point for all operations
//! - [`store`]: snapshot persistence abstraction and implementations
//! - [`reorder`]: ordering engine for manual moves
//! - [`autosave`]: timer-coalesced save scheduling
//! - [`ai`]: placeholder generate/summarize functions
//! - [`auth`]: role capability consumed by the store's mutation boundary
//! - [`config`]: configuration management
//! - [`error`]: error types
//! - `cli`: argument parsing and printing for the binary (not part of the
//!   lib API)

pub mod ai;
pub mod auth;
pub mod autosave;
pub mod config;
pub mod error;
pub mod model;
pub mod reorder;
pub mod reports;
pub mod store;
