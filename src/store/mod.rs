//! # Persistence Layer
//!
//! This module defines the snapshot persistence abstraction for repz. The
//! [`SnapshotStore`] trait is the only boundary that touches the durable
//! medium; everything above it works on the in-memory collection.
//!
//! ## Snapshot model
//!
//! The durable state is a single slot holding the full serialized report
//! collection. Every committed mutation writes the whole collection back;
//! there are no partial writes and no per-record files. From the caller's
//! perspective a `save` either replaces the entire snapshot or leaves the
//! previous one in place.
//!
//! ## Failure policy
//!
//! The running process owns the truth. A snapshot that is missing or fails
//! to parse degrades to an empty collection on `load`; a failed write is
//! logged and dropped on `save`. Neither ever propagates to the caller;
//! the system starts and keeps running regardless of the medium.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production JSON-file slot (`reports.json`).
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::model::Report;

pub mod fs;
pub mod memory;

/// Abstract interface for snapshot persistence.
pub trait SnapshotStore {
    /// Read the durable snapshot. A missing or unreadable snapshot yields an
    /// empty collection, never an error.
    fn load(&self) -> Vec<Report>;

    /// Replace the durable snapshot with the full current collection.
    /// Failures are logged and absorbed.
    fn save(&mut self, reports: &[Report]);
}
