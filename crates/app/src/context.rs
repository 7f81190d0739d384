//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AuthService, PgAuthService},
    database,
    domain::{
        businesses::PgBusinessesService,
        prices::{PriceRepository, PricesService, store::PgPriceStore},
        products::PgProductsService,
    },
    places::{GooglePlacesClient, GooglePlacesConfig, PlacesError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),

    #[error("failed to build places client")]
    Places(#[source] PlacesError),
}

#[derive(Clone)]
pub struct AppContext {
    pub prices: Arc<dyn PricesService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL, pool size and places
    /// client configuration, applying pending migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to or migrating the database fails, or
    /// when the places HTTP client cannot be built.
    pub async fn from_config(
        database_url: &str,
        max_connections: u32,
        places: GooglePlacesConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(database_url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        info!("database migrations applied");

        let places = GooglePlacesClient::new(places).map_err(AppInitError::Places)?;

        let prices = PriceRepository::new(
            Arc::new(PgPriceStore::new(pool.clone())),
            Arc::new(PgProductsService::new(pool.clone())),
            Arc::new(PgBusinessesService::new(pool.clone())),
            Arc::new(places),
        );

        Ok(Self {
            prices: Arc::new(prices),
            auth: Arc::new(PgAuthService::new(pool)),
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
