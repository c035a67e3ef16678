use std::sync::Arc;

use sqlx::PgPool;

use crate::builder::session::SessionMap;
use crate::config::Config;
use crate::persist::SnapshotStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable snapshot slot. Production: Redis. Tests: in-memory.
    pub snapshots: Arc<dyn SnapshotStore>,
    /// Live editing sessions, one per user.
    pub sessions: SessionMap,
    pub config: Config,
}
