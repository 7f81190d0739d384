//! Price Models

use jiff::{Timestamp, civil::Date};

use crate::domain::{
    businesses::records::BusinessRecord,
    prices::records::PriceUuid,
    products::records::ProductUuid,
    users::UserUuid,
};

/// Sentinel reported for every statistic when a product has no prices.
pub const NO_DATA: i64 = -1;

/// Price statistics for a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceStats {
    /// Mean price, truncated toward zero.
    pub average_price: i64,
    pub lowest_price: i64,
    pub highest_price: i64,
}

impl PriceStats {
    /// Statistics for a product without any recorded prices.
    pub const NO_DATA: Self = Self {
        average_price: NO_DATA,
        lowest_price: NO_DATA,
        highest_price: NO_DATA,
    };

    /// Whether these are the "no data" sentinel statistics.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        *self == Self::NO_DATA
    }
}

/// Average price for one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyAverage {
    pub date: Date,

    /// Mean price for the day, truncated toward zero.
    pub average_price: i64,
}

/// A price submission, enriched with the business it was observed at.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSubmission {
    pub uuid: PriceUuid,
    pub product: ProductUuid,

    /// Submitting user; `None` once sanitized for public listings.
    pub user: Option<UserUuid>,

    pub price: i64,
    pub image: Option<String>,
    pub submitted_at: Timestamp,
    pub business: BusinessRecord,
}

impl PriceSubmission {
    /// Strip the submitting user.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self { user: None, ..self }
    }
}
