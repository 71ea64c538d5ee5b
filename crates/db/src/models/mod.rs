pub mod seed;
pub mod travel;
