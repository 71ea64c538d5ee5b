//! Trip search criteria and the rules for turning raw request input into them.
//!
//! Input comes straight from the query string, so nothing here fails:
//! missing or malformed values fall back to defaults.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Defaults and limits
// ---------------------------------------------------------------------------

/// Destination used when the request does not name one.
pub const DEFAULT_DESTINATION: &str = "Unknown";

/// Total trip budget (INR) used when the request omits it or it does not parse.
pub const DEFAULT_BUDGET: i64 = 50_000;

/// Number of nights the total budget is spread over for the hotel ceiling.
pub const NIGHTS_PER_TRIP: i64 = 5;

/// Maximum number of rows returned per travel category.
pub const RESULT_CAP: i64 = 10;

/// Default page size for the unfiltered listing endpoints.
pub const DEFAULT_LISTING_LIMIT: i64 = 20;

/// Largest page size the listing endpoints accept.
pub const MAX_LISTING_LIMIT: i64 = 100;

/// Escape character for `LIKE`/`ILIKE` patterns (PostgreSQL default).
const LIKE_ESCAPE: char = '\\';

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// What the traveller is looking for: where, and with how much money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchCriteria {
    pub destination: String,
    /// Total trip budget in INR.
    pub budget: i64,
}

impl SearchCriteria {
    pub fn new(destination: impl Into<String>, budget: i64) -> Self {
        Self {
            destination: destination.into(),
            budget,
        }
    }

    /// Build criteria from raw query-string values, applying the defaults.
    ///
    /// A present-but-empty destination is kept as-is (it matches every row).
    /// NUL characters are dropped: PostgreSQL text cannot hold them.
    pub fn from_query(destination: Option<&str>, budget: Option<&str>) -> Self {
        Self {
            destination: destination
                .unwrap_or(DEFAULT_DESTINATION)
                .replace('\0', ""),
            budget: parse_budget(budget),
        }
    }

    /// Highest acceptable price per hotel night: the budget spread over
    /// [`NIGHTS_PER_TRIP`] nights.
    pub fn nightly_ceiling(&self) -> f64 {
        self.budget as f64 / NIGHTS_PER_TRIP as f64
    }

    /// `ILIKE` pattern matching any location containing the destination.
    pub fn destination_pattern(&self) -> String {
        contains_pattern(&self.destination)
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::new(DEFAULT_DESTINATION, DEFAULT_BUDGET)
    }
}

/// Parse a raw budget value, falling back to [`DEFAULT_BUDGET`].
///
/// Surrounding whitespace is ignored; anything that is not a whole number
/// (including overflow) yields the default.
pub fn parse_budget(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_BUDGET)
}

/// Build a `%text%` pattern that matches `text` literally as a substring.
///
/// The `LIKE` metacharacters `%` and `_`, and the escape character itself,
/// are escaped so user input can never act as a wildcard.
///
/// # Examples
///
/// ```
/// use tripwise_core::search::contains_pattern;
/// assert_eq!(contains_pattern("Goa"), "%Goa%");
/// assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
/// ```
pub fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
