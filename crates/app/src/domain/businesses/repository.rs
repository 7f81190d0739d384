//! Businesses Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use serde_json::Value;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, types::Json};

use crate::domain::businesses::{
    data::NewBusiness,
    records::{BusinessRecord, BusinessUuid},
};

const GET_BUSINESS_SQL: &str = include_str!("sql/get_business.sql");
const UPSERT_BUSINESS_SQL: &str = include_str!("sql/upsert_business.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgBusinessesRepository {
    pool: PgPool,
}

impl PgBusinessesRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn get_business(
        &self,
        business: BusinessUuid,
    ) -> Result<BusinessRecord, sqlx::Error> {
        query_as::<Postgres, BusinessRecord>(GET_BUSINESS_SQL)
            .bind(business.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    /// Insert the business, or refresh the business already keyed on the same
    /// place identifier.
    pub(crate) async fn upsert_business(
        &self,
        business: &NewBusiness,
    ) -> Result<BusinessRecord, sqlx::Error> {
        query_as::<Postgres, BusinessRecord>(UPSERT_BUSINESS_SQL)
            .bind(&business.name)
            .bind(&business.address)
            .bind(business.phone_number.as_deref())
            .bind(&business.place_id)
            .bind(Json(&business.place))
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for BusinessRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BusinessUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            phone_number: row.try_get("phone_number")?,
            place_id: row.try_get("place_id")?,
            place: row.try_get::<Json<Value>, _>("place")?.0,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
