//! Authentication
//!
//! Opaque API tokens, stored as SHA-256 hashes and resolved to the user that
//! owns them.

mod errors;
mod models;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
