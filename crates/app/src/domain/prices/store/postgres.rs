//! Postgres price store.

use async_trait::async_trait;
use jiff::civil::Date;
use jiff_sqlx::{Timestamp as SqlxTimestamp, ToSqlx};
use sqlx::{
    Arguments, FromRow, PgPool, Postgres, Row,
    postgres::{PgArguments, PgRow},
    query_as_with, query_scalar, query_with,
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    domain::{
        businesses::records::BusinessUuid,
        prices::{
            query::{
                AggregateQuery, GroupKey, PriceAggregate, PriceFilter, PriceGrouping,
                SubmissionQuery,
            },
            records::{NewPriceRecord, PriceRecord, PriceUuid},
            store::{PriceStore, PriceStoreError},
        },
        products::records::ProductUuid,
        users::UserUuid,
    },
    uuids::TypedUuid,
};

const AGGREGATE_BY_PRODUCT_SQL: &str = include_str!("sql/aggregate_by_product.sql");
const AGGREGATE_BY_DAY_SQL: &str = include_str!("sql/aggregate_by_day.sql");
const LIST_PRICES_SQL: &str = include_str!("sql/list_prices.sql");
const INSERT_PRICE_SQL: &str = include_str!("sql/insert_price.sql");

/// Price store backed by the `prices` table.
#[derive(Debug, Clone)]
pub struct PgPriceStore {
    pool: PgPool,
}

impl PgPriceStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Bind a filter as the leading `$1..$4` nullable parameters shared by every
/// price query.
fn filter_arguments(filter: &PriceFilter) -> Result<PgArguments, sqlx::Error> {
    let mut arguments = PgArguments::default();

    arguments
        .add(filter.product.map(TypedUuid::into_uuid))
        .map_err(sqlx::Error::Encode)?;

    arguments
        .add(filter.business.map(TypedUuid::into_uuid))
        .map_err(sqlx::Error::Encode)?;

    arguments
        .add(filter.user.map(TypedUuid::into_uuid))
        .map_err(sqlx::Error::Encode)?;

    arguments
        .add(filter.price.map(TypedUuid::into_uuid))
        .map_err(sqlx::Error::Encode)?;

    Ok(arguments)
}

fn aggregate_from_row(row: &PgRow, group_by: PriceGrouping) -> sqlx::Result<PriceAggregate> {
    let key = match group_by {
        PriceGrouping::Product => {
            GroupKey::Product(ProductUuid::from_uuid(row.try_get("product_uuid")?))
        }
        PriceGrouping::SubmittedDay => {
            let day: String = row.try_get("day")?;

            let date = day
                .parse::<Date>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "day".to_string(),
                    source: Box::new(e),
                })?;

            GroupKey::Day(date)
        }
    };

    Ok(PriceAggregate {
        key,
        count: row.try_get("count")?,
        total: row.try_get("total")?,
        lowest: row.try_get("lowest")?,
        highest: row.try_get("highest")?,
    })
}

#[async_trait]
impl PriceStore for PgPriceStore {
    async fn aggregate(
        &self,
        query: &AggregateQuery,
    ) -> Result<Vec<PriceAggregate>, PriceStoreError> {
        let sql = match query.group_by {
            PriceGrouping::Product => AGGREGATE_BY_PRODUCT_SQL,
            PriceGrouping::SubmittedDay => AGGREGATE_BY_DAY_SQL,
        };

        let rows = query_with::<Postgres, _>(sql, filter_arguments(&query.filter)?)
            .fetch_all(&self.pool)
            .await?;

        let aggregates = rows
            .iter()
            .map(|row| aggregate_from_row(row, query.group_by))
            .collect::<sqlx::Result<Vec<_>>>()?;

        debug!(groups = aggregates.len(), group_by = ?query.group_by, "aggregated prices");

        Ok(aggregates)
    }

    async fn find(&self, query: &SubmissionQuery) -> Result<Vec<PriceRecord>, PriceStoreError> {
        let mut arguments = filter_arguments(&query.filter)?;

        arguments
            .add(query.most_recent)
            .map_err(sqlx::Error::Encode)?;

        arguments
            .add(query.limit.map(|limit| i64::from(limit.get())))
            .map_err(sqlx::Error::Encode)?;

        Ok(query_as_with::<Postgres, PriceRecord, _>(LIST_PRICES_SQL, arguments)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn insert(&self, price: NewPriceRecord) -> Result<Option<PriceUuid>, PriceStoreError> {
        let uuid = query_scalar::<Postgres, Uuid>(INSERT_PRICE_SQL)
            .bind(price.product.into_uuid())
            .bind(price.business.into_uuid())
            .bind(price.user.into_uuid())
            .bind(price.price)
            .bind(price.image)
            .bind(price.submitted_at.to_sqlx())
            .fetch_optional(&self.pool)
            .await?;

        Ok(uuid.map(PriceUuid::from_uuid))
    }
}

impl<'r> FromRow<'r, PgRow> for PriceRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PriceUuid::from_uuid(row.try_get("uuid")?),
            product: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            business: BusinessUuid::from_uuid(row.try_get("business_uuid")?),
            user: UserUuid::from_uuid(row.try_get("user_uuid")?),
            price: row.try_get("price")?,
            image: row.try_get("image")?,
            submitted_at: row.try_get::<SqlxTimestamp, _>("submitted_at")?.to_jiff(),
        })
    }
}
