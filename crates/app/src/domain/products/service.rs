//! Products service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::products::{
    data::NewProduct, errors::ProductsServiceError, records::ProductRecord,
    repository::PgProductsRepository,
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgProductsRepository::new(pool),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn add_product(&self, product: NewProduct) -> Result<ProductRecord, ProductsServiceError> {
        let record = self.repository.upsert_product(&product).await?;

        debug!(product = %record.uuid, description = %record.description, "resolved product");

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Resolves the product with the given description, creating it when it
    /// does not exist yet. Tags are merged into an existing product.
    async fn add_product(&self, product: NewProduct) -> Result<ProductRecord, ProductsServiceError>;
}
