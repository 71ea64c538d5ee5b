use crate::templates::Templates;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool and the template environment are both
/// reference counted). Nothing request-specific lives here; per-request
/// database access goes through [`DbConn`](crate::middleware::db::DbConn).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tripwise_db::DbPool,
    /// Compiled page templates.
    pub templates: Templates,
}
