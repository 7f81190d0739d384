//! Price store
//!
//! The storage seam of the price repository: a small set of capabilities
//! expressed in terms of [`query`](crate::domain::prices::query)
//! specifications.

use async_trait::async_trait;
use mockall::automock;
use sqlx::error::DatabaseError;
use thiserror::Error;

use crate::domain::prices::{
    query::{AggregateQuery, PriceAggregate, SubmissionQuery},
    records::{NewPriceRecord, PriceRecord, PriceUuid},
};

mod memory;
mod postgres;

pub use memory::MemoryPriceStore;
pub use postgres::PgPriceStore;

/// Postgres `numeric_value_out_of_range`.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum PriceStoreError {
    /// An aggregated price total does not fit in 64 bits.
    #[error("price total out of range")]
    Overflow,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for PriceStoreError {
    fn from(error: sqlx::Error) -> Self {
        let out_of_range = error
            .as_database_error()
            .and_then(DatabaseError::code)
            .is_some_and(|code| code == NUMERIC_VALUE_OUT_OF_RANGE);

        if out_of_range {
            Self::Overflow
        } else {
            Self::Sql(error)
        }
    }
}

#[automock]
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Aggregate matching prices per group. Groups are ordered by key.
    async fn aggregate(
        &self,
        query: &AggregateQuery,
    ) -> Result<Vec<PriceAggregate>, PriceStoreError>;

    /// Fetch matching price records, ordered and limited as requested.
    async fn find(&self, query: &SubmissionQuery) -> Result<Vec<PriceRecord>, PriceStoreError>;

    /// Insert a price record, returning the identifier the store assigned.
    async fn insert(&self, price: NewPriceRecord) -> Result<Option<PriceUuid>, PriceStoreError>;
}
