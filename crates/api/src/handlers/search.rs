//! JSON endpoints over the travel catalogue.

use axum::extract::Query;
use axum::response::IntoResponse;
use axum::Json;
use tripwise_core::search::{DEFAULT_LISTING_LIMIT, MAX_LISTING_LIMIT};
use tripwise_db::repositories::TravelRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::db::DbConn;
use crate::query::{FlightListParams, SearchParams};
use crate::response::{DataResponse, TripSearchView};

/// GET /api/v1/search
///
/// Same search as the results page, returned as JSON.
pub async fn trip_search(
    mut db: DbConn,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let criteria = SearchParams::from_pairs(&pairs).criteria();
    let results = TravelRepo::search(db.conn().await?, &criteria).await?;

    Ok(Json(DataResponse {
        data: TripSearchView::new(criteria, results),
    }))
}

/// GET /api/v1/flights
///
/// Unfiltered flight listing, `limit` rows (default 20, at most 100).
pub async fn list_flights(
    mut db: DbConn,
    Query(params): Query<FlightListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LISTING_LIMIT);
    if !(1..=MAX_LISTING_LIMIT).contains(&limit) {
        return Err(AppError::BadRequest(format!(
            "limit must be between 1 and {MAX_LISTING_LIMIT}"
        )));
    }

    let flights = TravelRepo::list_flights(db.conn().await?, limit).await?;

    Ok(Json(DataResponse { data: flights }))
}
