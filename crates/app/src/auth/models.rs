//! Auth data models.

use jiff::Timestamp;

use crate::{domain::users::UserUuid, uuids::TypedUuid};

/// API Token UUID
pub type ApiTokenUuid = TypedUuid<ApiTokenRecord>;

/// API token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct ApiTokenRecord {
    pub uuid: ApiTokenUuid,
    pub user: UserUuid,
    pub created_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub struct NewApiToken {
    pub uuid: ApiTokenUuid,
    pub user: UserUuid,

    /// SHA-256 hex digest of the raw token.
    pub token_hash: String,
}

/// API token issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub record: ApiTokenRecord,
}
