//! Repository layer: one struct per concern, all methods take a pool or a
//! connection explicitly.

pub mod seed_repo;
pub mod travel_repo;

pub use seed_repo::SeedRepo;
pub use travel_repo::TravelRepo;
