pub mod health;
pub mod pages;

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /search         trip search as JSON (?destination=&budget=)
/// /flights        unfiltered flight listing (?limit=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::trip_search))
        .route("/flights", get(search::list_flights))
}
