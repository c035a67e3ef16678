//! Snapshot storage behind a trait so handlers and tests share one seam.

use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::AsyncCommands;
use uuid::Uuid;

/// Key-per-user snapshot slot. Stores the raw serialized snapshot so the
/// reconciler decides what a corrupt payload means.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load(&self, user_id: Uuid) -> Result<Option<String>>;
    async fn store(&self, user_id: Uuid, payload: String) -> Result<()>;
}

fn snapshot_key(user_id: Uuid) -> String {
    format!("resume:{user_id}")
}

/// Redis-backed store used in production.
pub struct RedisSnapshotStore {
    client: redis::Client,
}

impl RedisSnapshotStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SnapshotStore for RedisSnapshotStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<String>> {
        let mut con = self
            .client
            .get_multiplexed_async_connection()
            .await
            .context("Failed to connect to Redis")?;
        let payload: Option<String> = con
            .get(snapshot_key(user_id))
            .await
            .context("Failed to read snapshot slot")?;
        Ok(payload)
    }

    async fn store(&self, user_id: Uuid, payload: String) -> Result<()> {
        let mut con = self
            .client
            .get_multiplexed_async_connection()
            .await
            .context("Failed to connect to Redis")?;
        let _: () = con
            .set(snapshot_key(user_id), payload)
            .await
            .context("Failed to write snapshot slot")?;
        Ok(())
    }
}

/// In-memory store for tests. Counts writes so debounce behaviour is
/// observable.
#[derive(Default)]
pub struct MemorySnapshotStore {
    slots: tokio::sync::Mutex<std::collections::HashMap<Uuid, String>>,
    writes: std::sync::atomic::AtomicUsize,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<String>> {
        Ok(self.slots.lock().await.get(&user_id).cloned())
    }

    async fn store(&self, user_id: Uuid, payload: String) -> Result<()> {
        self.slots.lock().await.insert(user_id, payload);
        self.writes
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_key_is_per_user() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_ne!(snapshot_key(a), snapshot_key(b));
        assert!(snapshot_key(a).starts_with("resume:"));
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemorySnapshotStore::new();
        let user = Uuid::new_v4();
        assert_eq!(store.load(user).await.unwrap(), None);
        store.store(user, "{\"a\":1}".into()).await.unwrap();
        assert_eq!(store.load(user).await.unwrap().as_deref(), Some("{\"a\":1}"));
        assert_eq!(store.write_count(), 1);
    }
}
