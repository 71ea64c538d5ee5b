//! Handlers for the server-rendered pages.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use minijinja::context;
use tripwise_db::repositories::TravelRepo;

use crate::error::{PageResult, NOT_FOUND_PAGE};
use crate::middleware::db::DbConn;
use crate::query::SearchParams;
use crate::response::TripSearchView;
use crate::state::AppState;
use crate::templates::Templates;

/// Render a page that needs no data.
pub fn render_static(templates: &Templates, template: &str) -> PageResult<Html<String>> {
    Ok(Html(templates.render(template, context! {})?))
}

/// GET /results
///
/// Search all five travel categories for the requested destination and
/// budget and render them into `results.html`. Empty categories render as
/// empty sections; any database failure renders the "unavailable" page.
pub async fn results(
    State(state): State<AppState>,
    mut db: DbConn,
    Query(pairs): Query<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let criteria = SearchParams::from_pairs(&pairs).criteria();
    let results = TravelRepo::search(db.conn().await?, &criteria).await?;

    tracing::info!(
        destination = %criteria.destination,
        budget = criteria.budget,
        total = results.total(),
        "Rendering trip results",
    );

    let view = TripSearchView::new(criteria, results);
    Ok(Html(state.templates.render("results.html", &view)?))
}

/// Fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}
