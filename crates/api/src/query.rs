//! Shared query parameter types for handlers.

use serde::Deserialize;
use tripwise_core::search::SearchCriteria;

/// Raw trip search parameters (`?destination=&budget=`).
///
/// Both are kept as strings so a malformed budget falls back to the default
/// instead of rejecting the request.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub destination: Option<String>,
    pub budget: Option<String>,
}

impl SearchParams {
    /// Pick the parameters out of the raw query pairs. A repeated key keeps
    /// its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };
        Self {
            destination: first("destination"),
            budget: first("budget"),
        }
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria::from_query(self.destination.as_deref(), self.budget.as_deref())
    }
}

/// Query parameters for `GET /api/v1/flights`.
#[derive(Debug, Deserialize)]
pub struct FlightListParams {
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_use_defaults() {
        let criteria = SearchParams::default().criteria();
        assert_eq!(criteria, SearchCriteria::new("Unknown", 50_000));
    }

    #[test]
    fn bad_budget_keeps_destination() {
        let params = SearchParams {
            destination: Some("Goa".into()),
            budget: Some("cheap".into()),
        };
        assert_eq!(params.criteria(), SearchCriteria::new("Goa", 50_000));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let params = SearchParams::from_pairs(&pairs(&[
            ("destination", "Goa"),
            ("budget", "1"),
            ("destination", "Pune"),
            ("budget", "2"),
        ]));
        assert_eq!(params.criteria(), SearchCriteria::new("Goa", 1));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params = SearchParams::from_pairs(&pairs(&[("page", "2"), ("budget", "9000")]));
        assert_eq!(params.criteria(), SearchCriteria::new("Unknown", 9_000));
    }
}
