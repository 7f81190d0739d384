//! Savvy Domain Concerns

pub mod businesses;
pub mod prices;
pub mod products;
pub mod users;
