//! Shared price-reporting domain, persistence and external clients.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod places;
pub mod uuids;

#[cfg(test)]
mod test;
