//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Cloned for each request through Axum's state extraction; `DatabaseConnection` is
/// a pool handle, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
