//! Price Errors

use salvo::http::StatusError;
use tracing::error;

use savvy_app::{
    domain::{
        businesses::BusinessesServiceError, prices::PricesServiceError,
        products::ProductsServiceError,
    },
    places::PlacesError,
};

pub(crate) fn into_status_error(error: PricesServiceError) -> StatusError {
    match error {
        PricesServiceError::InvalidPrice(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        PricesServiceError::Product(
            ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData,
        ) => StatusError::bad_request().brief("Invalid product"),
        PricesServiceError::Business(
            BusinessesServiceError::MissingRequiredData | BusinessesServiceError::InvalidData,
        ) => StatusError::unprocessable_entity().brief("Invalid business details"),
        PricesServiceError::Places(PlacesError::Rejected { status, message }) => {
            let message = message.unwrap_or(status);

            StatusError::unprocessable_entity().brief(format!("Unknown business: {message}"))
        }
        PricesServiceError::Places(PlacesError::InvalidDetails(_)) => {
            StatusError::unprocessable_entity().brief("Incomplete business details")
        }
        PricesServiceError::Places(source) => {
            error!("failed to look up place: {source}");

            StatusError::internal_server_error()
        }
        PricesServiceError::Product(source) => {
            error!("failed to resolve product: {source}");

            StatusError::internal_server_error()
        }
        PricesServiceError::Business(source) => {
            error!("failed to resolve business: {source}");

            StatusError::internal_server_error()
        }
        PricesServiceError::Store(source) => {
            error!("price store failure: {source}");

            StatusError::internal_server_error()
        }
        PricesServiceError::NotInserted => {
            error!("price store did not return an id for the inserted price");

            StatusError::internal_server_error()
        }
    }
}
