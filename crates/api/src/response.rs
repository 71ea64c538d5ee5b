//! Shared response payload types.

use serde::Serialize;
use tripwise_core::search::SearchCriteria;
use tripwise_db::models::travel::TripSearchResults;

/// Standard `{ "data": T }` response envelope for the JSON API.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// A trip search together with the criteria that produced it.
///
/// Serialized flat, this is both the `results.html` template context and the
/// `/api/v1/search` payload.
#[derive(Debug, Serialize)]
pub struct TripSearchView {
    pub destination: String,
    pub budget: i64,
    pub nightly_ceiling: f64,
    #[serde(flatten)]
    pub results: TripSearchResults,
}

impl TripSearchView {
    pub fn new(criteria: SearchCriteria, results: TripSearchResults) -> Self {
        Self {
            nightly_ceiling: criteria.nightly_ceiling(),
            destination: criteria.destination,
            budget: criteria.budget,
            results,
        }
    }
}
