//! Price Records

use jiff::Timestamp;

use crate::{
    domain::{businesses::records::BusinessUuid, products::records::ProductUuid, users::UserUuid},
    uuids::TypedUuid,
};

/// Price UUID
pub type PriceUuid = TypedUuid<PriceRecord>;

/// Price Record
///
/// A persisted price observation. Records are never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub uuid: PriceUuid,
    pub product: ProductUuid,
    pub business: BusinessUuid,
    pub user: UserUuid,

    /// Price in minor currency units (cents).
    pub price: i64,

    pub image: Option<String>,
    pub submitted_at: Timestamp,
}

/// New Price Record
///
/// Everything but the identifier, which the store assigns on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPriceRecord {
    pub product: ProductUuid,
    pub business: BusinessUuid,
    pub user: UserUuid,
    pub price: i64,
    pub image: Option<String>,
    pub submitted_at: Timestamp,
}
