//! Bulk writes for the seed tool. Nothing in the web server writes.

use sqlx::{PgConnection, PgPool};

use crate::models::seed::{NewAttraction, NewBus, NewFlight, NewHotel, NewTrain, SeedData};

/// Tables rewritten by [`SeedRepo::replace_all`].
pub const TRAVEL_TABLES: [&str; 5] = ["flights", "hotels", "trains", "buses", "attractions"];

/// Replaces the travel catalogue.
pub struct SeedRepo;

impl SeedRepo {
    /// Empty the five travel tables and insert `data`, all in one transaction.
    pub async fn replace_all(pool: &PgPool, data: &SeedData) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("TRUNCATE flights, hotels, trains, buses, attractions")
            .execute(&mut *tx)
            .await?;

        for flight in &data.flights {
            Self::insert_flight(&mut tx, flight).await?;
        }
        tracing::info!(count = data.flights.len(), "Populated flights");

        for hotel in &data.hotels {
            Self::insert_hotel(&mut tx, hotel).await?;
        }
        tracing::info!(count = data.hotels.len(), "Populated hotels");

        for train in &data.trains {
            Self::insert_train(&mut tx, train).await?;
        }
        tracing::info!(count = data.trains.len(), "Populated trains");

        for bus in &data.buses {
            Self::insert_bus(&mut tx, bus).await?;
        }
        tracing::info!(count = data.buses.len(), "Populated buses");

        for attraction in &data.attractions {
            Self::insert_attraction(&mut tx, attraction).await?;
        }
        tracing::info!(count = data.attractions.len(), "Populated attractions");

        tx.commit().await
    }

    /// Row count of one of the [`TRAVEL_TABLES`].
    pub async fn count(pool: &PgPool, table: &str) -> Result<i64, sqlx::Error> {
        if !TRAVEL_TABLES.contains(&table) {
            return Err(sqlx::Error::Protocol(format!("unknown travel table: {table}")));
        }
        let query = format!("SELECT COUNT(*) FROM {table}");
        sqlx::query_scalar(&query).fetch_one(pool).await
    }

    async fn insert_flight(conn: &mut PgConnection, f: &NewFlight) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO flights \
                (flight_id, airline, origin, destination, departure_time, \
                 arrival_time, duration_minutes, price_inr, seats_available) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&f.flight_id)
        .bind(&f.airline)
        .bind(&f.origin)
        .bind(&f.destination)
        .bind(f.departure_time)
        .bind(f.arrival_time)
        .bind(f.duration_minutes)
        .bind(f.price_inr)
        .bind(f.seats_available)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn insert_hotel(conn: &mut PgConnection, h: &NewHotel) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO hotels \
                (hotel_id, hotel_name, city, address, star_rating, \
                 price_per_night_inr, amenities, available_rooms) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&h.hotel_id)
        .bind(&h.hotel_name)
        .bind(&h.city)
        .bind(&h.address)
        .bind(h.star_rating)
        .bind(h.price_per_night_inr)
        .bind(sqlx::types::Json(&h.amenities))
        .bind(h.available_rooms)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn insert_train(conn: &mut PgConnection, t: &NewTrain) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO trains \
                (train_id, train_name, origin, destination, departure_time, arrival_time, \
                 price_sl_inr, price_3a_inr, price_2a_inr, seats_available_2a) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(&t.train_id)
        .bind(&t.train_name)
        .bind(&t.origin)
        .bind(&t.destination)
        .bind(t.departure_time)
        .bind(t.arrival_time)
        .bind(t.price_sl_inr)
        .bind(t.price_3a_inr)
        .bind(t.price_2a_inr)
        .bind(t.seats_available_2a)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn insert_bus(conn: &mut PgConnection, b: &NewBus) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO buses \
                (bus_id, operator, bus_type, origin, destination, \
                 departure_time, arrival_time, price_inr, seats_available) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&b.bus_id)
        .bind(&b.operator)
        .bind(&b.bus_type)
        .bind(&b.origin)
        .bind(&b.destination)
        .bind(b.departure_time)
        .bind(b.arrival_time)
        .bind(b.price_inr)
        .bind(b.seats_available)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn insert_attraction(
        conn: &mut PgConnection,
        a: &NewAttraction,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO attractions \
                (attraction_id, attraction_name, city, category, \
                 description, entry_fee_inr, opening_hours) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&a.attraction_id)
        .bind(&a.attraction_name)
        .bind(&a.city)
        .bind(&a.category)
        .bind(&a.description)
        .bind(a.entry_fee_inr)
        .bind(&a.opening_hours)
        .execute(conn)
        .await?;
        Ok(())
    }
}
