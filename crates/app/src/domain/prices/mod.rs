//! Prices
//!
//! Crowdsourced price submissions and the statistics derived from them.

pub mod data;
pub mod errors;
pub mod models;
pub mod query;
pub mod records;
pub mod service;
pub mod store;

pub use errors::PricesServiceError;
pub use service::*;
