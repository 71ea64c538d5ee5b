//! Route definitions for the server-rendered pages.

use axum::extract::State;
use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes, mounted at the root.
///
/// ```text
/// GET /                  -> index.html
/// GET /login             -> login.html
/// GET /signup            -> signup.html
/// GET /planner           -> planner.html
/// GET /results           -> results.html (trip search)
/// GET /budget-setup      -> budget_setup.html
/// GET /budget-expenses   -> budget_expenses.html
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", static_page("index.html"))
        .route("/login", static_page("login.html"))
        .route("/signup", static_page("signup.html"))
        .route("/planner", static_page("planner.html"))
        .route("/results", get(pages::results))
        .route("/budget-setup", static_page("budget_setup.html"))
        .route("/budget-expenses", static_page("budget_expenses.html"))
}

/// A GET route rendering `template` with no data. Query parameters are ignored.
fn static_page(template: &'static str) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| async move {
        pages::render_static(&state.templates, template)
    })
}
