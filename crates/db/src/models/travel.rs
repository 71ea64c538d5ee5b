//! Search result rows for the five travel tables.

use serde::Serialize;

/// One row as a column-name → value map.
///
/// Rows are produced with `to_jsonb(row)` so every column the table has is
/// passed through to the page without this crate knowing the schema.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Everything found for one trip search, one list per travel category.
///
/// The lists are independent: nothing is ranked or de-duplicated across them,
/// and row order within a list is whatever the database returned.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TripSearchResults {
    pub hotels: Vec<Record>,
    pub flights: Vec<Record>,
    pub trains: Vec<Record>,
    pub buses: Vec<Record>,
    pub attractions: Vec<Record>,
}

impl TripSearchResults {
    /// Total number of rows across all categories.
    pub fn total(&self) -> usize {
        self.hotels.len()
            + self.flights.len()
            + self.trains.len()
            + self.buses.len()
            + self.attractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
