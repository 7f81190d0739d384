//! Price query specifications
//!
//! Store-agnostic descriptions of the reads the price repository performs.
//! Each [`PriceStore`](crate::domain::prices::store::PriceStore)
//! implementation translates them into its own query language.

use std::num::NonZeroU32;

use jiff::civil::Date;

use crate::domain::{
    businesses::records::BusinessUuid,
    prices::records::{PriceRecord, PriceUuid},
    products::records::ProductUuid,
    users::UserUuid,
};

/// Equality filter over price records.
///
/// An absent field places no constraint on that column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceFilter {
    pub price: Option<PriceUuid>,
    pub product: Option<ProductUuid>,
    pub business: Option<BusinessUuid>,
    pub user: Option<UserUuid>,
}

impl PriceFilter {
    /// Filter matching every price of a single product.
    #[must_use]
    pub fn product(product: ProductUuid) -> Self {
        Self {
            product: Some(product),
            ..Self::default()
        }
    }

    /// Filter matching the single price with the given id.
    #[must_use]
    pub fn price(price: PriceUuid) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    /// Whether the filter matches every record.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.price.is_none()
            && self.product.is_none()
            && self.business.is_none()
            && self.user.is_none()
    }

    #[must_use]
    pub fn matches(&self, record: &PriceRecord) -> bool {
        self.price.is_none_or(|price| price == record.uuid)
            && self.product.is_none_or(|product| product == record.product)
            && self.business.is_none_or(|business| business == record.business)
            && self.user.is_none_or(|user| user == record.user)
    }
}

/// How matching prices are bucketed before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceGrouping {
    /// One group per product.
    Product,

    /// One group per UTC calendar day of submission.
    SubmittedDay,
}

/// Aggregate prices matching a filter, per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateQuery {
    pub filter: PriceFilter,
    pub group_by: PriceGrouping,
}

/// Key identifying an aggregated group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Product(ProductUuid),
    Day(Date),
}

/// Aggregated prices of one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceAggregate {
    pub key: GroupKey,
    pub count: i64,
    pub total: i64,
    pub lowest: i64,
    pub highest: i64,
}

impl PriceAggregate {
    /// Mean price of the group, truncated toward zero.
    ///
    /// `None` for an empty group.
    #[must_use]
    pub fn average(&self) -> Option<i64> {
        self.total.checked_div(self.count)
    }
}

/// List prices matching a filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionQuery {
    pub filter: PriceFilter,

    /// Maximum number of records to return.
    pub limit: Option<NonZeroU32>,

    /// Newest submissions first. Otherwise oldest first.
    pub most_recent: bool,
}

impl SubmissionQuery {
    /// Query for every price matching `filter`, oldest first.
    #[must_use]
    pub fn new(filter: PriceFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }
}
