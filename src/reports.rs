//! The report store: sole owner of the canonical in-memory collection.
//!
//! Every mutation goes through here. The store validates, applies the change
//! to the ordered collection, records failures in a shared error slot and
//! write-through persists the full snapshot after every committed mutation.
//! The persistence adapter is constructor-injected; there is no ambient
//! singleton, whoever composes the application owns the store.
//!
//! Persistence is best-effort: a failed write is logged inside the adapter
//! and never rolls back the in-memory change. The store never re-reads from
//! the adapter after construction.

use crate::auth::UserRole;
use crate::error::{RepzError, Result};
use crate::model::{Report, ReportDraft, ReportPatch, ReportStatus};
use crate::reorder;
use crate::store::SnapshotStore;
use chrono::Utc;
use uuid::Uuid;

/// Default capacity of the collection. Creation beyond it is rejected.
pub const MAX_REPORTS: usize = 1000;

/// How many published reports the featured section shows.
pub const FEATURED_LIMIT: usize = 2;

pub struct ReportStore<S: SnapshotStore> {
    reports: Vec<Report>,
    last_error: Option<RepzError>,
    max_reports: usize,
    persist: S,
}

impl<S: SnapshotStore> ReportStore<S> {
    /// Seeds the in-memory collection from the adapter's snapshot.
    pub fn new(persist: S) -> Self {
        let reports = persist.load();
        Self {
            reports,
            last_error: None,
            max_reports: MAX_REPORTS,
            persist,
        }
    }

    pub fn with_max_reports(mut self, max_reports: usize) -> Self {
        self.max_reports = max_reports;
        self
    }

    /// The current ordered collection, newest first except where manual
    /// reordering has overridden insertion order.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Last failed operation's error, for observers that did not make the
    /// failing call. Cleared explicitly.
    pub fn error(&self) -> Option<&RepzError> {
        self.last_error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Pure lookup, no side effects.
    pub fn get(&self, id: &Uuid) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == *id)
    }

    /// The featured projection: the first [`FEATURED_LIMIT`] published
    /// reports, in sequence order.
    pub fn featured(&self) -> Vec<&Report> {
        self.reports
            .iter()
            .filter(|r| r.status == ReportStatus::Published)
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// Everything outside the featured projection, in backing order. This is
    /// the subsequence list surfaces display as manually reorderable.
    pub fn regular(&self) -> Vec<&Report> {
        let featured: Vec<Uuid> = self.featured().iter().map(|r| r.id).collect();
        self.reports
            .iter()
            .filter(|r| !featured.contains(&r.id))
            .collect()
    }

    /// Creates a report from the draft and prepends it to the collection.
    pub fn create(&mut self, role: UserRole, draft: ReportDraft) -> Result<Report> {
        if !role.can_modify() {
            return Err(self.fail(RepzError::PermissionDenied(role)));
        }
        if draft.title.trim().is_empty() {
            return Err(self.fail(RepzError::Validation("Title is required".to_string())));
        }
        if self.reports.len() >= self.max_reports {
            return Err(self.fail(RepzError::QuotaExceeded(self.max_reports)));
        }

        let report = Report::new(draft);
        self.reports.insert(0, report.clone());
        self.commit();
        Ok(report)
    }

    /// Merges the supplied fields into the matching report and refreshes its
    /// `updated_at`. A missing id raises [`RepzError::NotFound`].
    pub fn update(&mut self, role: UserRole, id: &Uuid, patch: ReportPatch) -> Result<()> {
        if !role.can_modify() {
            return Err(self.fail(RepzError::PermissionDenied(role)));
        }
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(self.fail(RepzError::Validation(
                    "Title cannot be empty".to_string(),
                )));
            }
        }

        let report = match self.reports.iter_mut().find(|r| r.id == *id) {
            Some(report) => report,
            None => return Err(self.fail(RepzError::NotFound(*id))),
        };

        if let Some(title) = patch.title {
            report.title = title.trim().to_string();
        }
        if let Some(content) = patch.content {
            report.content = content;
        }
        if let Some(status) = patch.status {
            report.status = status;
        }
        report.updated_at = Utc::now();

        self.commit();
        Ok(())
    }

    /// Removes the report with the matching id. Removing an absent id is a
    /// no-op, not an error, and triggers no persistence write.
    pub fn delete(&mut self, role: UserRole, id: &Uuid) -> Result<()> {
        if !role.can_modify() {
            return Err(self.fail(RepzError::PermissionDenied(role)));
        }

        let before = self.reports.len();
        self.reports.retain(|r| r.id != *id);
        if self.reports.len() != before {
            self.commit();
        }
        Ok(())
    }

    /// Moves `moved` to the position currently held by `target` in the full
    /// backing sequence. A no-op (no write) when the ids are identical or
    /// either is absent.
    pub fn reorder(&mut self, role: UserRole, moved: &Uuid, target: &Uuid) -> Result<()> {
        if !role.can_modify() {
            return Err(self.fail(RepzError::PermissionDenied(role)));
        }

        if reorder::move_item(&mut self.reports, moved, target, |r| r.id) {
            if let Some(report) = self.reports.iter_mut().find(|r| r.id == *moved) {
                report.updated_at = Utc::now();
            }
            self.commit();
        }
        Ok(())
    }

    /// Direct access to the persistence adapter, for assertions in tests.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn persist(&self) -> &S {
        &self.persist
    }

    fn fail(&mut self, err: RepzError) -> RepzError {
        self.last_error = Some(err.clone());
        err
    }

    fn commit(&mut self) {
        self.persist.save(&self.reports);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{DiscardingStore, InMemoryStore};

    fn admin_store() -> ReportStore<InMemoryStore> {
        ReportStore::new(InMemoryStore::new())
    }

    fn create(store: &mut ReportStore<InMemoryStore>, title: &str) -> Report {
        store
            .create(UserRole::Admin, ReportDraft::new(title, ""))
            .unwrap()
    }

    #[test]
    fn create_trims_title_and_prepends() {
        let mut store = admin_store();
        let first = create(&mut store, "First");
        let second = store
            .create(UserRole::Admin, ReportDraft::new("  Second  ", "<p>x</p>"))
            .unwrap();

        assert_eq!(second.title, "Second");
        assert_eq!(second.status, ReportStatus::Draft);
        assert_eq!(second.created_at, second.updated_at);
        // Newest first.
        assert_eq!(store.reports()[0].id, second.id);
        assert_eq!(store.reports()[1].id, first.id);
    }

    #[test]
    fn create_rejects_blank_titles() {
        let mut store = admin_store();
        for title in ["", "   "] {
            let err = store
                .create(UserRole::Admin, ReportDraft::new(title, "content"))
                .unwrap_err();
            assert_eq!(err, RepzError::Validation("Title is required".to_string()));
        }
        assert!(store.is_empty());
        assert!(matches!(store.error(), Some(RepzError::Validation(_))));
    }

    #[test]
    fn create_enforces_quota() {
        let mut store = ReportStore::new(InMemoryStore::new()).with_max_reports(2);
        create(&mut store, "A");
        create(&mut store, "B");

        let err = store
            .create(UserRole::Admin, ReportDraft::new("C", ""))
            .unwrap_err();
        assert_eq!(err, RepzError::QuotaExceeded(2));
        assert_eq!(store.len(), 2);
        assert_eq!(store.error(), Some(&RepzError::QuotaExceeded(2)));
    }

    #[test]
    fn viewer_cannot_mutate() {
        let mut store = admin_store();
        let report = create(&mut store, "A");
        store.clear_error();

        let denied = RepzError::PermissionDenied(UserRole::Viewer);
        assert_eq!(
            store
                .create(UserRole::Viewer, ReportDraft::new("B", ""))
                .unwrap_err(),
            denied
        );
        assert_eq!(
            store
                .update(UserRole::Viewer, &report.id, ReportPatch::default())
                .unwrap_err(),
            denied
        );
        assert_eq!(store.delete(UserRole::Viewer, &report.id).unwrap_err(), denied);
        assert_eq!(
            store
                .reorder(UserRole::Viewer, &report.id, &report.id)
                .unwrap_err(),
            denied
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.error(), Some(&denied));
    }

    #[test]
    fn update_merges_supplied_fields_only() {
        let mut store = admin_store();
        let report = store
            .create(UserRole::Admin, ReportDraft::new("Title", "original"))
            .unwrap();

        store
            .update(
                UserRole::Admin,
                &report.id,
                ReportPatch::default().status(ReportStatus::Published),
            )
            .unwrap();

        let updated = store.get(&report.id).unwrap();
        assert_eq!(updated.title, "Title");
        assert_eq!(updated.content, "original");
        assert_eq!(updated.status, ReportStatus::Published);
        assert_eq!(updated.created_at, report.created_at);
        assert!(updated.updated_at >= report.updated_at);
    }

    #[test]
    fn update_rejects_blank_title_and_keeps_fields() {
        let mut store = admin_store();
        let report = store
            .create(UserRole::Admin, ReportDraft::new("Title", "content"))
            .unwrap();

        let err = store
            .update(
                UserRole::Admin,
                &report.id,
                ReportPatch::default().title("   ").content("clobbered"),
            )
            .unwrap_err();
        assert_eq!(err, RepzError::Validation("Title cannot be empty".to_string()));

        let unchanged = store.get(&report.id).unwrap();
        assert_eq!(unchanged.title, "Title");
        assert_eq!(unchanged.content, "content");
    }

    #[test]
    fn update_missing_id_raises_not_found() {
        let mut store = admin_store();
        create(&mut store, "A");
        let missing = Uuid::new_v4();

        let err = store
            .update(UserRole::Admin, &missing, ReportPatch::default().content("x"))
            .unwrap_err();
        assert_eq!(err, RepzError::NotFound(missing));
        assert_eq!(store.error(), Some(&RepzError::NotFound(missing)));
    }

    #[test]
    fn delete_removes_and_persists() {
        let mut store = admin_store();
        let a = create(&mut store, "A");
        let b = create(&mut store, "B");

        store.delete(UserRole::Admin, &a.id).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(&a.id).is_none());
        assert!(store.get(&b.id).is_some());
    }

    #[test]
    fn delete_missing_id_is_a_silent_noop() {
        let mut store = admin_store();
        create(&mut store, "A");
        let saves_before = store.persist.save_count();
        let snapshot_before = store.reports().to_vec();

        store.delete(UserRole::Admin, &Uuid::new_v4()).unwrap();

        assert_eq!(store.reports(), snapshot_before.as_slice());
        assert_eq!(store.persist.save_count(), saves_before);
        assert!(store.error().is_none());
    }

    #[test]
    fn reorder_splices_within_backing_sequence() {
        let mut store = admin_store();
        let c = create(&mut store, "C");
        let b = create(&mut store, "B");
        let a = create(&mut store, "A");
        // Collection is [A, B, C].

        store.reorder(UserRole::Admin, &a.id, &c.id).unwrap();
        let order: Vec<Uuid> = store.reports().iter().map(|r| r.id).collect();
        assert_eq!(order, vec![b.id, c.id, a.id]);
    }

    #[test]
    fn reorder_noops_do_not_write() {
        let mut store = admin_store();
        let a = create(&mut store, "A");
        let b = create(&mut store, "B");
        let saves_before = store.persist.save_count();

        store.reorder(UserRole::Admin, &a.id, &a.id).unwrap();
        store.reorder(UserRole::Admin, &a.id, &Uuid::new_v4()).unwrap();
        store.reorder(UserRole::Admin, &Uuid::new_v4(), &b.id).unwrap();

        assert_eq!(store.persist.save_count(), saves_before);
        let order: Vec<Uuid> = store.reports().iter().map(|r| r.id).collect();
        assert_eq!(order, vec![b.id, a.id]);
    }

    #[test]
    fn seeds_from_adapter_snapshot() {
        let seeded = vec![
            Report::new(ReportDraft::new("Old", "x")),
            Report::new(ReportDraft::new("Older", "y")),
        ];
        let store = ReportStore::new(InMemoryStore::seeded(seeded.clone()));
        assert_eq!(store.reports(), seeded.as_slice());
    }

    #[test]
    fn mutations_survive_failed_writes() {
        // The medium drops every write; memory stays the source of truth.
        let mut store = ReportStore::new(DiscardingStore::new());
        let report = store
            .create(UserRole::Admin, ReportDraft::new("A", ""))
            .unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(&report.id).is_some());
        assert!(store.error().is_none());
    }

    #[test]
    fn write_through_persists_every_committed_mutation() {
        let mut store = admin_store();
        let a = create(&mut store, "A");
        let b = create(&mut store, "B");
        store
            .update(UserRole::Admin, &a.id, ReportPatch::default().content("x"))
            .unwrap();
        store.reorder(UserRole::Admin, &b.id, &a.id).unwrap();
        store.delete(UserRole::Admin, &b.id).unwrap();

        assert_eq!(store.persist.save_count(), 5);
        assert_eq!(store.persist.snapshot(), store.reports());
    }

    #[test]
    fn featured_takes_first_two_published() {
        let mut store = admin_store();
        let ids: Vec<Uuid> = ["D", "C", "B", "A"]
            .into_iter()
            .map(|t| create(&mut store, t).id)
            .collect();
        // Collection is [A, B, C, D]; publish C, A, D in that order of position.
        for id in [ids[3], ids[1], ids[0]] {
            store
                .update(
                    UserRole::Admin,
                    &id,
                    ReportPatch::default().status(ReportStatus::Published),
                )
                .unwrap();
        }

        let featured: Vec<Uuid> = store.featured().iter().map(|r| r.id).collect();
        // First two published in sequence order: A then C.
        assert_eq!(featured, vec![ids[3], ids[1]]);

        let regular: Vec<Uuid> = store.regular().iter().map(|r| r.id).collect();
        assert_eq!(regular, vec![ids[2], ids[0]]);
    }

    #[test]
    fn clear_error_resets_the_slot() {
        let mut store = admin_store();
        let _ = store.create(UserRole::Admin, ReportDraft::new("", ""));
        assert!(store.error().is_some());
        store.clear_error();
        assert!(store.error().is_none());
    }
}
