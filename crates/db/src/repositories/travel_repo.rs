//! Read-only lookups against the `hotels`, `flights`, `trains`, `buses` and
//! `attractions` tables.
//!
//! Every dynamic value is a bound parameter. Location filters are
//! case-insensitive substring matches built with
//! [`tripwise_core::search::contains_pattern`].

use std::time::Instant;

use sqlx::types::Json;
use sqlx::{PgConnection, PgExecutor};
use tripwise_core::search::{SearchCriteria, RESULT_CAP};

use crate::models::travel::{Record, TripSearchResults};

const HOTELS_QUERY: &str = "\
    SELECT to_jsonb(h) FROM hotels h \
    WHERE h.city ILIKE $1 AND h.price_per_night_inr <= $2::float8 \
    LIMIT $3";

const FLIGHTS_QUERY: &str = "SELECT to_jsonb(f) FROM flights f WHERE f.destination ILIKE $1 LIMIT $2";

const TRAINS_QUERY: &str = "SELECT to_jsonb(t) FROM trains t WHERE t.destination ILIKE $1 LIMIT $2";

const BUSES_QUERY: &str = "SELECT to_jsonb(b) FROM buses b WHERE b.destination ILIKE $1 LIMIT $2";

const ATTRACTIONS_QUERY: &str = "SELECT to_jsonb(a) FROM attractions a WHERE a.city ILIKE $1 LIMIT $2";

const LIST_FLIGHTS_QUERY: &str = "SELECT to_jsonb(f) FROM flights f LIMIT $1";

/// Provides the trip search queries.
pub struct TravelRepo;

impl TravelRepo {
    /// Run all five category lookups for `criteria` on one connection.
    ///
    /// The queries run one after another; the first failure aborts the
    /// search and no partial result is returned.
    pub async fn search(
        conn: &mut PgConnection,
        criteria: &SearchCriteria,
    ) -> Result<TripSearchResults, sqlx::Error> {
        let start = Instant::now();
        let pattern = criteria.destination_pattern();

        let hotels = Self::hotels(&mut *conn, &pattern, criteria.nightly_ceiling()).await?;
        let flights = Self::flights(&mut *conn, &pattern).await?;
        let trains = Self::trains(&mut *conn, &pattern).await?;
        let buses = Self::buses(&mut *conn, &pattern).await?;
        let attractions = Self::attractions(&mut *conn, &pattern).await?;

        let results = TripSearchResults {
            hotels,
            flights,
            trains,
            buses,
            attractions,
        };

        tracing::debug!(
            destination = %criteria.destination,
            budget = criteria.budget,
            hotels = results.hotels.len(),
            flights = results.flights.len(),
            trains = results.trains.len(),
            buses = results.buses.len(),
            attractions = results.attractions.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Trip search executed",
        );

        Ok(results)
    }

    /// Hotels whose city matches `pattern` and whose nightly price is at most
    /// `max_price_per_night`.
    pub async fn hotels<'e>(
        executor: impl PgExecutor<'e>,
        pattern: &str,
        max_price_per_night: f64,
    ) -> Result<Vec<Record>, sqlx::Error> {
        let rows = sqlx::query_scalar::<_, Json<Record>>(HOTELS_QUERY)
            .bind(pattern)
            .bind(max_price_per_night)
            .bind(RESULT_CAP)
            .fetch_all(executor)
            .await?;
        Ok(into_records(rows))
    }

    /// Flights whose destination matches `pattern`.
    pub async fn flights<'e>(
        executor: impl PgExecutor<'e>,
        pattern: &str,
    ) -> Result<Vec<Record>, sqlx::Error> {
        Self::by_location(executor, FLIGHTS_QUERY, pattern).await
    }

    /// Trains whose destination matches `pattern`.
    pub async fn trains<'e>(
        executor: impl PgExecutor<'e>,
        pattern: &str,
    ) -> Result<Vec<Record>, sqlx::Error> {
        Self::by_location(executor, TRAINS_QUERY, pattern).await
    }

    /// Buses whose destination matches `pattern`.
    pub async fn buses<'e>(
        executor: impl PgExecutor<'e>,
        pattern: &str,
    ) -> Result<Vec<Record>, sqlx::Error> {
        Self::by_location(executor, BUSES_QUERY, pattern).await
    }

    /// Attractions whose city matches `pattern`.
    pub async fn attractions<'e>(
        executor: impl PgExecutor<'e>,
        pattern: &str,
    ) -> Result<Vec<Record>, sqlx::Error> {
        Self::by_location(executor, ATTRACTIONS_QUERY, pattern).await
    }

    /// Up to `limit` flights, unfiltered.
    pub async fn list_flights<'e>(
        executor: impl PgExecutor<'e>,
        limit: i64,
    ) -> Result<Vec<Record>, sqlx::Error> {
        let rows = sqlx::query_scalar::<_, Json<Record>>(LIST_FLIGHTS_QUERY)
            .bind(limit)
            .fetch_all(executor)
            .await?;
        Ok(into_records(rows))
    }

    async fn by_location<'e>(
        executor: impl PgExecutor<'e>,
        query: &'static str,
        pattern: &str,
    ) -> Result<Vec<Record>, sqlx::Error> {
        let rows = sqlx::query_scalar::<_, Json<Record>>(query)
            .bind(pattern)
            .bind(RESULT_CAP)
            .fetch_all(executor)
            .await?;
        Ok(into_records(rows))
    }
}

fn into_records(rows: Vec<Json<Record>>) -> Vec<Record> {
    rows.into_iter().map(|Json(record)| record).collect()
}
