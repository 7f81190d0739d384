//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::products::{
    data::NewProduct,
    records::{ProductRecord, ProductUuid},
};

const UPSERT_PRODUCT_SQL: &str = include_str!("sql/upsert_product.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the product, or merge tags into the existing product with the
    /// same description.
    pub(crate) async fn upsert_product(
        &self,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPSERT_PRODUCT_SQL)
            .bind(&product.description)
            .bind(&product.tags)
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            description: row.try_get("description")?,
            tags: row.try_get("tags")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
