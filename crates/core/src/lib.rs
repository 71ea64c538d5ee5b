//! Domain types and rules shared by the database layer and the web server.
//!
//! This crate has no internal dependencies so both `tripwise-db` and
//! `tripwise-api` (and the seed tool) can use it.

pub mod search;
pub mod types;
