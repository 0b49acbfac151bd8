//! Autosave scheduler: coalesces a burst of content edits into one deferred
//! save per pause in typing.
//!
//! Each [`Autosave::schedule`] call restarts the delay timer with the latest
//! content; the save only happens once the timer survives a full delay
//! without being superseded. A scheduler that is dropped or cancelled before
//! the timer fires never writes. The scheduler keeps a baseline of the last
//! content it knows to be persisted, so both the timer fire and the manual
//! [`Autosave::save_now`] path degrade to no-ops when nothing changed.
//!
//! The timer runs on a tokio task; the store is shared behind `Arc<Mutex>`
//! so the task and the owning surface never observe a torn collection.

use crate::auth::UserRole;
use crate::error::Result;
use crate::model::ReportPatch;
use crate::reports::ReportStore;
use crate::store::SnapshotStore;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;
use uuid::Uuid;

/// Delay between the last edit and the deferred save.
pub const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_millis(2000);

/// A report store shared between an editing surface and its scheduler.
pub type SharedStore<S> = Arc<Mutex<ReportStore<S>>>;

struct SaveState {
    in_flight: bool,
    last_saved: Option<DateTime<Utc>>,
    /// Content last known persisted for this report.
    baseline: String,
}

pub struct Autosave<S: SnapshotStore + Send + 'static> {
    store: SharedStore<S>,
    report_id: Uuid,
    role: UserRole,
    delay: Duration,
    state: Arc<Mutex<SaveState>>,
    pending: Option<JoinHandle<()>>,
}

impl<S: SnapshotStore + Send + 'static> Autosave<S> {
    /// Creates a scheduler for one report's editing session. The baseline is
    /// seeded from the report's current content.
    pub fn new(store: SharedStore<S>, report_id: Uuid, role: UserRole) -> Self {
        let baseline = store
            .lock()
            .expect("report store lock poisoned")
            .get(&report_id)
            .map(|r| r.content.clone())
            .unwrap_or_default();
        Self {
            store,
            report_id,
            role,
            delay: DEFAULT_AUTOSAVE_DELAY,
            state: Arc::new(Mutex::new(SaveState {
                in_flight: false,
                last_saved: None,
                baseline,
            })),
            pending: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Restarts the delay timer with the latest content. Must be called from
    /// within a tokio runtime.
    pub fn schedule(&mut self, content: String) {
        self.cancel();

        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.state);
        let id = self.report_id;
        let role = self.role;
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(delay).await;
                {
                    let mut st = state.lock().expect("autosave state poisoned");
                    if st.in_flight {
                        // A save is still running; re-arm for another delay.
                        continue;
                    }
                    if st.baseline == content {
                        return;
                    }
                    st.in_flight = true;
                }

                let outcome = store
                    .lock()
                    .expect("report store lock poisoned")
                    .update(role, &id, ReportPatch::default().content(content.clone()));

                let mut st = state.lock().expect("autosave state poisoned");
                st.in_flight = false;
                match outcome {
                    Ok(()) => {
                        st.last_saved = Some(Utc::now());
                        st.baseline = content;
                    }
                    Err(e) => warn!("autosave failed for report {}: {}", id, e),
                }
                return;
            }
        }));
    }

    /// Manual save, independent of the timer. A no-op when the content
    /// matches the last persisted baseline.
    pub fn save_now(&mut self, content: String) -> Result<()> {
        {
            let mut st = self.state.lock().expect("autosave state poisoned");
            if st.baseline == content {
                return Ok(());
            }
            st.in_flight = true;
        }

        let outcome = self
            .store
            .lock()
            .expect("report store lock poisoned")
            .update(
                self.role,
                &self.report_id,
                ReportPatch::default().content(content.clone()),
            );

        let mut st = self.state.lock().expect("autosave state poisoned");
        st.in_flight = false;
        if outcome.is_ok() {
            st.last_saved = Some(Utc::now());
            st.baseline = content;
        }
        outcome
    }

    /// Drops any pending timer fire without saving.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.state.lock().expect("autosave state poisoned").last_saved
    }

    pub fn is_saving(&self) -> bool {
        self.state.lock().expect("autosave state poisoned").in_flight
    }
}

impl<S: SnapshotStore + Send + 'static> Drop for Autosave<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
