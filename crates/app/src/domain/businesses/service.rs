//! Businesses service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::businesses::{
    data::NewBusiness,
    errors::BusinessesServiceError,
    records::{BusinessRecord, BusinessUuid},
    repository::PgBusinessesRepository,
};

#[derive(Debug, Clone)]
pub struct PgBusinessesService {
    repository: PgBusinessesRepository,
}

impl PgBusinessesService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgBusinessesRepository::new(pool),
        }
    }
}

#[async_trait]
impl BusinessesService for PgBusinessesService {
    async fn get_business(
        &self,
        business: BusinessUuid,
    ) -> Result<BusinessRecord, BusinessesServiceError> {
        Ok(self.repository.get_business(business).await?)
    }

    async fn add_business(
        &self,
        business: NewBusiness,
    ) -> Result<BusinessRecord, BusinessesServiceError> {
        let record = self.repository.upsert_business(&business).await?;

        debug!(business = %record.uuid, place_id = %record.place_id, "resolved business");

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait BusinessesService: Send + Sync {
    /// Retrieve a single business.
    async fn get_business(
        &self,
        business: BusinessUuid,
    ) -> Result<BusinessRecord, BusinessesServiceError>;

    /// Resolves the business keyed on the given place identifier, creating it
    /// when it does not exist yet.
    async fn add_business(
        &self,
        business: NewBusiness,
    ) -> Result<BusinessRecord, BusinessesServiceError>;
}
