use super::SnapshotStore;
use crate::model::Report;

/// In-memory snapshot slot for testing and development.
/// Does NOT persist data across processes.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Vec<Report>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with an existing collection, as if a previous session
    /// had written it.
    pub fn seeded(snapshot: Vec<Report>) -> Self {
        Self { snapshot, saves: 0 }
    }

    /// Number of `save` calls observed. Lets tests assert write-through
    /// behavior (and its absence for no-op operations).
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn snapshot(&self) -> &[Report] {
        &self.snapshot
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Vec<Report> {
        self.snapshot.clone()
    }

    fn save(&mut self, reports: &[Report]) {
        self.snapshot = reports.to_vec();
        self.saves += 1;
    }
}

/// A slot whose writes silently go nowhere, emulating a full or revoked
/// medium. `load` still returns whatever it was seeded with.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Default)]
pub struct DiscardingStore {
    seeded: Vec<Report>,
}

#[cfg(any(test, feature = "test_utils"))]
impl DiscardingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl SnapshotStore for DiscardingStore {
    fn load(&self) -> Vec<Report> {
        self.seeded.clone()
    }

    fn save(&mut self, _reports: &[Report]) {}
}
