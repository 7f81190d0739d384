//! Business Records

use jiff::Timestamp;
use serde_json::Value;

use crate::uuids::TypedUuid;

/// Business UUID
pub type BusinessUuid = TypedUuid<BusinessRecord>;

/// Business Record
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessRecord {
    pub uuid: BusinessUuid,
    pub name: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub place_id: String,
    pub place: Value,
    pub created_at: Timestamp,
}
