use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::NoteService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by the health check.
    pub pool: notekeeper_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Note lifecycle service.
    pub notes: Arc<NoteService>,
}

impl AppState {
    /// Wire the state around an opened store handle.
    pub fn new(pool: notekeeper_db::DbPool, config: ServerConfig) -> Self {
        Self {
            notes: Arc::new(NoteService::new(pool.clone())),
            pool,
            config: Arc::new(config),
        }
    }
}
