//! Liveness endpoint with database and connection pool status.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tripwise_db::DbPool;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database cannot be reached. The page
    /// server keeps running either way.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub pool: PoolStatus,
}

/// Connection pool occupancy. Every request returns its connection when it
/// finishes, so `idle` settles back to `size` between requests.
#[derive(Serialize)]
pub struct PoolStatus {
    pub size: u32,
    pub idle: usize,
    pub max: u32,
}

impl PoolStatus {
    fn of(pool: &DbPool) -> Self {
        Self {
            size: pool.size(),
            idle: pool.num_idle(),
            max: pool.options().get_max_connections(),
        }
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = tripwise_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pool: PoolStatus::of(&state.pool),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
