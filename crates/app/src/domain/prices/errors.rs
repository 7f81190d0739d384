//! Prices service errors.

use thiserror::Error;

use crate::{
    domain::{
        businesses::BusinessesServiceError, prices::data::InvalidPrice,
        prices::store::PriceStoreError, products::ProductsServiceError,
    },
    places::PlacesError,
};

#[derive(Debug, Error)]
pub enum PricesServiceError {
    #[error("invalid price value")]
    InvalidPrice(#[from] InvalidPrice),

    #[error("price was not stored")]
    NotInserted,

    #[error("failed to resolve product")]
    Product(#[source] ProductsServiceError),

    #[error("failed to resolve business")]
    Business(#[source] BusinessesServiceError),

    #[error("failed to look up place")]
    Places(#[source] PlacesError),

    #[error("storage error")]
    Store(#[source] PriceStoreError),
}

impl From<PriceStoreError> for PricesServiceError {
    fn from(error: PriceStoreError) -> Self {
        Self::Store(error)
    }
}

impl From<ProductsServiceError> for PricesServiceError {
    fn from(error: ProductsServiceError) -> Self {
        Self::Product(error)
    }
}

impl From<BusinessesServiceError> for PricesServiceError {
    fn from(error: BusinessesServiceError) -> Self {
        Self::Business(error)
    }
}

impl From<PlacesError> for PricesServiceError {
    fn from(error: PlacesError) -> Self {
        Self::Places(error)
    }
}
