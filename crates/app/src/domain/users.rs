//! Users
//!
//! Users are owned by the identity provider; only their identifiers are
//! referenced here.

use crate::uuids::TypedUuid;

/// User marker type.
#[derive(Debug)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;
