//! Random travel catalogue generation for development databases.
//!
//! Generation is pure: callers pass the RNG and the reference time, so the
//! output is reproducible with a seeded RNG.

use chrono::TimeDelta;
use rand::seq::index;
use rand::Rng;
use tripwise_core::types::Timestamp;

use crate::models::seed::{NewAttraction, NewBus, NewFlight, NewHotel, NewTrain, SeedData};

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

pub const INDIAN_CITIES: [&str; 24] = [
    "Mumbai", "Delhi", "Bengaluru", "Chennai", "Kolkata", "Hyderabad", "Jaipur", "Goa", "Kochi",
    "Ahmedabad", "Pune", "Agra", "Varanasi", "Udaipur", "Shimla", "Rishikesh", "Amritsar",
    "Jodhpur", "Mysuru", "Darjeeling", "Lucknow", "Nagpur", "Indore", "Patna",
];

pub const AIRLINES: [&str; 6] = [
    "IndiGo",
    "Air India",
    "Vistara",
    "SpiceJet",
    "Akasa Air",
    "Air India Express",
];

pub const BUS_OPERATORS: [&str; 6] = [
    "Sharma Travels",
    "VRL Logistics",
    "RedBus Express",
    "ZingBus",
    "IntrCity SmartBus",
    "Prasanna Purple",
];

pub const BUS_TYPES: [&str; 4] = ["AC Sleeper", "Non-AC Seater", "AC Seater", "Volvo Multi-Axle"];

pub const AMENITIES: [&str; 7] = [
    "Free WiFi",
    "Swimming Pool",
    "Restaurant",
    "Gym",
    "Free Parking",
    "Spa",
    "Room Service",
];

pub const ATTRACTION_CATEGORIES: [&str; 5] = [
    "Historical Monument",
    "Nature & Parks",
    "Museum",
    "Religious Site",
    "Shopping District",
];

pub const ENTRY_FEES_INR: [i32; 6] = [0, 20, 50, 100, 250, 500];

pub const OPENING_HOURS: &str = "10:00 AM - 6:00 PM";

const NAME_STEMS: [&str; 12] = [
    "Lotus", "Heritage", "Sapphire", "Orchid", "Banyan", "Saffron", "Peacock", "Monsoon",
    "Marigold", "Sandalwood", "Emerald", "Royal",
];

const STREETS: [&str; 6] = [
    "MG Road",
    "Station Road",
    "Lake View Road",
    "Temple Street",
    "Market Lane",
    "Ring Road",
];

const SENTENCES: [&str; 8] = [
    "A favourite with local families on weekends.",
    "Best visited early in the morning before the crowds arrive.",
    "Guided tours are available in English and Hindi.",
    "Photography is allowed in most areas.",
    "The surrounding streets are full of small food stalls.",
    "It is wheelchair accessible through the main entrance.",
    "Evenings bring a light and sound show during the season.",
    "Plan for at least two hours to see everything.",
];

const SECONDS_PER_DAY: i64 = 86_400;

// ---------------------------------------------------------------------------
// Counts
// ---------------------------------------------------------------------------

/// How many rows to generate per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    pub flights: usize,
    pub hotels: usize,
    pub trains: usize,
    pub buses: usize,
    pub attractions: usize,
}

/// Largest accepted `SEED_SCALE`: 100 times the default catalogue.
pub const MAX_SEED_SCALE: f64 = 100.0;

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            flights: 1000,
            hotels: 800,
            trains: 500,
            buses: 600,
            attractions: 400,
        }
    }
}

impl SeedCounts {
    /// Default counts multiplied by `factor`, rounded. The factor is clamped
    /// to `0.0..=MAX_SEED_SCALE`; NaN counts as zero.
    pub fn scaled(factor: f64) -> Self {
        let d = Self::default();
        let factor = if factor.is_nan() {
            0.0
        } else {
            factor.clamp(0.0, MAX_SEED_SCALE)
        };
        let scale = |n: usize| (n as f64 * factor).round() as usize;
        Self {
            flights: scale(d.flights),
            hotels: scale(d.hotels),
            trains: scale(d.trains),
            buses: scale(d.buses),
            attractions: scale(d.attractions),
        }
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Generate a whole catalogue.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: Timestamp, counts: SeedCounts) -> SeedData {
    SeedData {
        flights: generate_flights(rng, now, counts.flights),
        hotels: generate_hotels(rng, counts.hotels),
        trains: generate_trains(rng, now, counts.trains),
        buses: generate_buses(rng, now, counts.buses),
        attractions: generate_attractions(rng, counts.attractions),
    }
}

pub fn generate_flights<R: Rng + ?Sized>(rng: &mut R, now: Timestamp, n: usize) -> Vec<NewFlight> {
    (0..n)
        .map(|i| {
            let (origin, destination) = city_pair(rng);
            let departure_time = departure_within(rng, now, 60);
            let duration: i32 = rng.random_range(50..=240);
            NewFlight {
                flight_id: format!("FL{}", 10_000 + i),
                airline: pick(rng, &AIRLINES).to_string(),
                origin: origin.to_string(),
                destination: destination.to_string(),
                departure_time,
                arrival_time: departure_time + TimeDelta::minutes(duration.into()),
                duration_minutes: duration,
                price_inr: rng.random_range(2500..=18_000),
                seats_available: rng.random_range(2..=80),
            }
        })
        .collect()
}

pub fn generate_hotels<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<NewHotel> {
    (0..n)
        .map(|i| {
            let city = pick(rng, &INDIAN_CITIES);
            let amenity_count = rng.random_range(2..=6);
            let amenities = index::sample(rng, AMENITIES.len(), amenity_count)
                .into_iter()
                .map(|idx| AMENITIES[idx].to_string())
                .collect();
            NewHotel {
                hotel_id: format!("HT{}", 1000 + i),
                hotel_name: format!("{} {} Palace", pick(rng, &NAME_STEMS), city),
                city: city.to_string(),
                address: format!(
                    "{} {}, {}",
                    rng.random_range(1..=400_u32),
                    pick(rng, &STREETS),
                    city
                ),
                star_rating: f64::from(rng.random_range(25..=50_i32)) / 10.0,
                price_per_night_inr: rng.random_range(800..=25_000),
                amenities,
                available_rooms: rng.random_range(0..=40),
            }
        })
        .collect()
}

pub fn generate_trains<R: Rng + ?Sized>(rng: &mut R, now: Timestamp, n: usize) -> Vec<NewTrain> {
    (0..n)
        .map(|i| {
            let (origin, destination) = city_pair(rng);
            let departure_time = departure_within(rng, now, 60);
            let duration: i64 = rng.random_range(300..=2200);
            NewTrain {
                train_id: format!("TR{}", 12_000 + i),
                train_name: format!("{}-{} Superfast", first_word(origin), first_word(destination)),
                origin: origin.to_string(),
                destination: destination.to_string(),
                departure_time,
                arrival_time: departure_time + TimeDelta::minutes(duration),
                price_sl_inr: rng.random_range(400..=1200),
                price_3a_inr: rng.random_range(1000..=3000),
                price_2a_inr: rng.random_range(1500..=5000),
                seats_available_2a: rng.random_range(5..=100),
            }
        })
        .collect()
}

pub fn generate_buses<R: Rng + ?Sized>(rng: &mut R, now: Timestamp, n: usize) -> Vec<NewBus> {
    (0..n)
        .map(|i| {
            let (origin, destination) = city_pair(rng);
            let departure_time = departure_within(rng, now, 15);
            let duration: i64 = rng.random_range(180..=1500);
            NewBus {
                bus_id: format!("BUS{}", 8000 + i),
                operator: pick(rng, &BUS_OPERATORS).to_string(),
                bus_type: pick(rng, &BUS_TYPES).to_string(),
                origin: origin.to_string(),
                destination: destination.to_string(),
                departure_time,
                arrival_time: departure_time + TimeDelta::minutes(duration),
                price_inr: rng.random_range(300..=2500),
                seats_available: rng.random_range(1..=35),
            }
        })
        .collect()
}

pub fn generate_attractions<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<NewAttraction> {
    (0..n)
        .map(|i| {
            let description = index::sample(rng, SENTENCES.len(), 4)
                .into_iter()
                .map(|idx| SENTENCES[idx])
                .collect::<Vec<_>>()
                .join(" ");
            NewAttraction {
                attraction_id: format!("AT{}", 2000 + i),
                attraction_name: format!("{} Point", pick(rng, &NAME_STEMS)),
                city: pick(rng, &INDIAN_CITIES).to_string(),
                category: pick(rng, &ATTRACTION_CATEGORIES).to_string(),
                description,
                entry_fee_inr: *pick(rng, &ENTRY_FEES_INR),
                opening_hours: OPENING_HOURS.to_string(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Two distinct cities: (origin, destination).
fn city_pair<R: Rng + ?Sized>(rng: &mut R) -> (&'static str, &'static str) {
    let picked = index::sample(rng, INDIAN_CITIES.len(), 2);
    (INDIAN_CITIES[picked.index(0)], INDIAN_CITIES[picked.index(1)])
}

/// A departure between one day and `max_days` days after `now`.
fn departure_within<R: Rng + ?Sized>(rng: &mut R, now: Timestamp, max_days: i64) -> Timestamp {
    let offset = rng.random_range(SECONDS_PER_DAY..=max_days * SECONDS_PER_DAY);
    now + TimeDelta::seconds(offset)
}

fn first_word(city: &str) -> &str {
    city.split(' ').next().unwrap_or(city)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn fixed_now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn default_counts_match_catalogue_sizes() {
        let counts = SeedCounts::default();
        assert_eq!(
            (counts.flights, counts.hotels, counts.trains, counts.buses, counts.attractions),
            (1000, 800, 500, 600, 400)
        );
    }

    #[test]
    fn scaled_counts_cap_unbounded_factors() {
        let capped = SeedCounts::scaled(MAX_SEED_SCALE);
        assert_eq!(SeedCounts::scaled(f64::INFINITY), capped);
        assert_eq!(SeedCounts::scaled(1e300), capped);
        assert_eq!(capped.flights, 100_000);
        assert_eq!(SeedCounts::scaled(f64::NAN), SeedCounts::scaled(0.0));
        assert_eq!(SeedCounts::scaled(f64::NEG_INFINITY).hotels, 0);
    }

    #[test]
    fn scaled_counts_round_and_clamp() {
        let half = SeedCounts::scaled(0.5);
        assert_eq!(half.flights, 500);
        assert_eq!(half.attractions, 200);

        let none = SeedCounts::scaled(-3.0);
        assert_eq!(none.hotels, 0);
    }

    #[test]
    fn generate_honours_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let counts = SeedCounts::scaled(0.01);
        let data = generate(&mut rng, fixed_now(), counts);

        assert_eq!(data.flights.len(), 10);
        assert_eq!(data.hotels.len(), 8);
        assert_eq!(data.trains.len(), 5);
        assert_eq!(data.buses.len(), 6);
        assert_eq!(data.attractions.len(), 4);
    }

    #[test]
    fn flights_have_distinct_endpoints_and_consistent_times() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = fixed_now();

        for flight in generate_flights(&mut rng, now, 200) {
            assert_ne!(flight.origin, flight.destination);
            assert!((50..=240).contains(&flight.duration_minutes));
            assert!((2500..=18_000).contains(&flight.price_inr));
            assert!((2..=80).contains(&flight.seats_available));
            assert_eq!(
                flight.arrival_time - flight.departure_time,
                TimeDelta::minutes(flight.duration_minutes.into())
            );
            let lead = flight.departure_time - now;
            assert!(lead >= TimeDelta::days(1) && lead <= TimeDelta::days(60));
        }
    }

    #[test]
    fn ids_are_sequential_with_prefixes() {
        let mut rng = StdRng::seed_from_u64(3);
        let data = generate(&mut rng, fixed_now(), SeedCounts::scaled(0.01));

        assert_eq!(data.flights[0].flight_id, "FL10000");
        assert_eq!(data.flights[9].flight_id, "FL10009");
        assert_eq!(data.hotels[0].hotel_id, "HT1000");
        assert_eq!(data.trains[0].train_id, "TR12000");
        assert_eq!(data.buses[0].bus_id, "BUS8000");
        assert_eq!(data.attractions[0].attraction_id, "AT2000");
    }

    #[test]
    fn hotels_stay_in_ranges_with_unique_amenities() {
        let mut rng = StdRng::seed_from_u64(11);

        for hotel in generate_hotels(&mut rng, 200) {
            assert!(INDIAN_CITIES.contains(&hotel.city.as_str()));
            assert!((800..=25_000).contains(&hotel.price_per_night_inr));
            assert!((2.5..=5.0).contains(&hotel.star_rating));
            assert!((0..=40).contains(&hotel.available_rooms));
            assert!((2..=6).contains(&hotel.amenities.len()));
            let unique: HashSet<_> = hotel.amenities.iter().collect();
            assert_eq!(unique.len(), hotel.amenities.len());
        }
    }

    #[test]
    fn buses_depart_within_fifteen_days() {
        let mut rng = StdRng::seed_from_u64(5);
        let now = fixed_now();

        for bus in generate_buses(&mut rng, now, 200) {
            assert!(bus.departure_time - now <= TimeDelta::days(15));
            assert!(BUS_TYPES.contains(&bus.bus_type.as_str()));
            assert!((300..=2500).contains(&bus.price_inr));
        }
    }

    #[test]
    fn trains_are_named_after_their_route() {
        let mut rng = StdRng::seed_from_u64(9);
        let train = &generate_trains(&mut rng, fixed_now(), 1)[0];

        assert_eq!(
            train.train_name,
            format!("{}-{} Superfast", train.origin, train.destination)
        );
    }

    #[test]
    fn attractions_use_fixed_fees_and_hours() {
        let mut rng = StdRng::seed_from_u64(13);

        for attraction in generate_attractions(&mut rng, 100) {
            assert!(ENTRY_FEES_INR.contains(&attraction.entry_fee_inr));
            assert_eq!(attraction.opening_hours, OPENING_HOURS);
            assert!(attraction.attraction_name.ends_with(" Point"));
        }
    }

    #[test]
    fn same_seed_same_catalogue() {
        let a = generate_hotels(&mut StdRng::seed_from_u64(42), 20);
        let b = generate_hotels(&mut StdRng::seed_from_u64(42), 20);
        let names = |v: &[NewHotel]| v.iter().map(|h| h.hotel_name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&a), names(&b));
    }
}
