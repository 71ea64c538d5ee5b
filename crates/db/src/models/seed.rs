//! Insert DTOs for the seed tool. Field names match the table columns.

use tripwise_core::types::Timestamp;

#[derive(Debug, Clone)]
pub struct NewFlight {
    pub flight_id: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub duration_minutes: i32,
    pub price_inr: i32,
    pub seats_available: i32,
}

#[derive(Debug, Clone)]
pub struct NewHotel {
    pub hotel_id: String,
    pub hotel_name: String,
    pub city: String,
    pub address: String,
    pub star_rating: f64,
    pub price_per_night_inr: i32,
    pub amenities: Vec<String>,
    pub available_rooms: i32,
}

#[derive(Debug, Clone)]
pub struct NewTrain {
    pub train_id: String,
    pub train_name: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub price_sl_inr: i32,
    pub price_3a_inr: i32,
    pub price_2a_inr: i32,
    pub seats_available_2a: i32,
}

#[derive(Debug, Clone)]
pub struct NewBus {
    pub bus_id: String,
    pub operator: String,
    pub bus_type: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: Timestamp,
    pub arrival_time: Timestamp,
    pub price_inr: i32,
    pub seats_available: i32,
}

#[derive(Debug, Clone)]
pub struct NewAttraction {
    pub attraction_id: String,
    pub attraction_name: String,
    pub city: String,
    pub category: String,
    pub description: String,
    pub entry_fee_inr: i32,
    pub opening_hours: String,
}

/// A full generated catalogue, ready to be written by
/// [`SeedRepo::replace_all`](crate::repositories::SeedRepo::replace_all).
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub flights: Vec<NewFlight>,
    pub hotels: Vec<NewHotel>,
    pub trains: Vec<NewTrain>,
    pub buses: Vec<NewBus>,
    pub attractions: Vec<NewAttraction>,
}
