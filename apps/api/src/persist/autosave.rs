//! Debounced auto-save of the working document.
//!
//! Every mutation schedules a snapshot write; a burst of edits inside the
//! quiet period collapses into one write carrying the latest state. The
//! debouncer can be disabled wholesale, which initial-load hydration uses so
//! that seeding the editor never overwrites a snapshot the user typed.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::warn;
use uuid::Uuid;

use crate::document::ResumeDocument;
use crate::models::snapshot::LocalSnapshot;
use crate::persist::store::SnapshotStore;

const QUIET_PERIOD: Duration = Duration::from_secs(2);

pub struct AutoSave {
    store: Arc<dyn SnapshotStore>,
    user_id: Uuid,
    quiet_period: Duration,
    enabled: bool,
    pending: Option<JoinHandle<()>>,
}

impl AutoSave {
    pub fn new(store: Arc<dyn SnapshotStore>, user_id: Uuid) -> Self {
        AutoSave {
            store,
            user_id,
            quiet_period: QUIET_PERIOD,
            enabled: false,
            pending: None,
        }
    }

    #[cfg(test)]
    fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            if let Some(pending) = self.pending.take() {
                pending.abort();
            }
        }
    }

    /// Schedules a snapshot write after the quiet period, replacing any write
    /// already scheduled. No-op while disabled.
    pub fn schedule(&mut self, resume_id: &str, doc: &ResumeDocument) {
        if !self.enabled {
            return;
        }
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let snapshot = LocalSnapshot::new(resume_id.to_string(), self.user_id, doc.clone());
        let store = Arc::clone(&self.store);
        let user_id = self.user_id;
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            let payload = match serde_json::to_string(&snapshot) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("Failed to serialize snapshot for {user_id}: {e}");
                    return;
                }
            };
            if let Err(e) = store.store(user_id, payload).await {
                warn!("Auto-save failed for {user_id}: {e}");
            }
        }));
    }
}

impl Drop for AutoSave {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::store::MemorySnapshotStore;

    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_burst_collapses_to_one_write() {
        let store = Arc::new(MemorySnapshotStore::new());
        let user = Uuid::new_v4();
        let mut autosave = AutoSave::new(Arc::clone(&store) as Arc<dyn SnapshotStore>, user);
        autosave.set_enabled(true);

        let mut doc = ResumeDocument::default();
        for name in ["J", "Ja", "Jan", "Jane"] {
            doc.personal.full_name = name.into();
            autosave.schedule("resume_x", &doc);
            tokio::time::advance(Duration::from_millis(500)).await;
            settle().await;
        }
        assert_eq!(store.write_count(), 0, "quiet period never elapsed");

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;

        assert_eq!(store.write_count(), 1);
        let payload = store.load(user).await.unwrap().unwrap();
        let snap: LocalSnapshot = serde_json::from_str(&payload).unwrap();
        assert_eq!(snap.resume_data.personal.full_name, "Jane");
        assert_eq!(snap.id, "resume_x");
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_autosave_never_writes() {
        let store = Arc::new(MemorySnapshotStore::new());
        let user = Uuid::new_v4();
        let mut autosave = AutoSave::new(Arc::clone(&store) as Arc<dyn SnapshotStore>, user);

        autosave.schedule("resume_x", &ResumeDocument::default());
        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabling_cancels_pending_write() {
        let store = Arc::new(MemorySnapshotStore::new());
        let user = Uuid::new_v4();
        let mut autosave = AutoSave::new(Arc::clone(&store) as Arc<dyn SnapshotStore>, user);
        autosave.set_enabled(true);

        autosave.schedule("resume_x", &ResumeDocument::default());
        autosave.set_enabled(false);
        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_write_separately() {
        let store = Arc::new(MemorySnapshotStore::new());
        let user = Uuid::new_v4();
        let mut autosave = AutoSave::new(Arc::clone(&store) as Arc<dyn SnapshotStore>, user)
            .with_quiet_period(Duration::from_secs(2));
        autosave.set_enabled(true);

        autosave.schedule("resume_x", &ResumeDocument::default());
        settle().await;
        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;
        autosave.schedule("resume_x", &ResumeDocument::default());
        settle().await;
        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;

        assert_eq!(store.write_count(), 2);
    }
}
