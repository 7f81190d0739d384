//! Create Price Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use serde::Deserialize;
use serde_json::Value;

use savvy_app::{
    domain::{
        prices::data::{BusinessReference, NewPriceSubmission, PriceAmount},
        products::data::NewProduct,
        users::UserUuid,
    },
    places::PlaceDetails,
};

use crate::{
    extensions::*,
    prices::{errors::into_status_error, responses::PriceCreatedResponse},
    state::State,
};

/// Create Price Request
#[derive(Debug, Deserialize)]
pub(crate) struct CreatePriceRequest {
    pub product: ProductRequest,
    pub business: BusinessRequest,

    /// Integer cents, a decimal (truncated) or a string holding an integer
    pub price: PriceAmount,

    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductRequest {
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// A bare place identifier, or place details already looked up by the client.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum BusinessRequest {
    PlaceId(String),
    Place(Value),
}

impl CreatePriceRequest {
    fn into_submission(self, user: UserUuid) -> Result<NewPriceSubmission, StatusError> {
        let description = self.product.description.trim();

        if description.is_empty() {
            return Err(StatusError::bad_request().brief("product description is required"));
        }

        let business = match self.business {
            BusinessRequest::PlaceId(place_id) if place_id.trim().is_empty() => {
                return Err(StatusError::bad_request().brief("business is required"));
            }
            BusinessRequest::PlaceId(place_id) => BusinessReference::PlaceId(place_id),
            BusinessRequest::Place(place) => PlaceDetails::try_from(place)
                .map(BusinessReference::Place)
                .map_err(|_invalid| {
                    StatusError::unprocessable_entity().brief("Incomplete business details")
                })?,
        };

        Ok(NewPriceSubmission {
            product: NewProduct {
                description: description.to_string(),
                tags: self.product.tags,
            },
            business,
            price: self.price,
            user,
            image: self.image,
        })
    }
}

/// Create Price Handler
///
/// Records a price for the authenticated user. The product is created if it
/// does not exist yet, the business is resolved through the places service.
#[endpoint(
    tags("prices"),
    summary = "Submit Price",
    security(("bearer_auth" = [])),
    responses(
        (status_code = 201, description = "Price recorded"),
        (status_code = 400, description = "Bad Request"),
        (status_code = 422, description = "Business could not be resolved"),
        (status_code = 500, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PriceCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let submission = req
        .parse_json::<CreatePriceRequest>()
        .await
        .map_err(|error| StatusError::bad_request().brief(format!("invalid price payload: {error}")))?
        .into_submission(user)?;

    let id = state
        .prices
        .add_price(submission)
        .await
        .map_err(into_status_error)?
        .into_uuid();

    res.add_header(LOCATION, format!("/prices/{id}"), true)
        .or_500("set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(PriceCreatedResponse { id }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use savvy_app::{
        domain::prices::{
            MockPricesService, PricesServiceError, data::InvalidPrice, records::PriceUuid,
        },
        places::PlacesError,
    };
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_UUID, prices_service};

    use super::*;

    fn make_service(prices: MockPricesService) -> Service {
        prices_service(prices, Router::with_path("prices").post(handler))
    }

    fn milk_at_acme(price: Value) -> Value {
        json!({
            "product": { "description": "Milk 1L", "tags": ["dairy"] },
            "business": "acme-place",
            "price": price,
        })
    }

    #[tokio::test]
    async fn test_create_price_returns_201_with_id_and_location() -> TestResult {
        let uuid = PriceUuid::new();

        let mut prices = MockPricesService::new();

        prices
            .expect_add_price()
            .once()
            .withf(|submission| {
                submission.user == TEST_USER_UUID
                    && submission.product.description == "Milk 1L"
                    && submission.product.tags == ["dairy"]
                    && submission.business == BusinessReference::PlaceId("acme-place".to_string())
                    && submission.price == PriceAmount::Integer(500)
                    && submission.image.is_none()
            })
            .return_once(move |_| Ok(uuid));

        let mut res = TestClient::post("http://example.com/prices")
            .json(&milk_at_acme(json!(500)))
            .send(&make_service(prices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(location, Some(format!("/prices/{uuid}").as_str()));

        let response: PriceCreatedResponse = res.take_json().await?;

        assert_eq!(response.id, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_price_accepts_place_details() -> TestResult {
        let mut prices = MockPricesService::new();

        prices
            .expect_add_price()
            .once()
            .withf(|submission| {
                matches!(
                    &submission.business,
                    BusinessReference::Place(details) if details.name == "Acme"
                )
            })
            .return_once(|_| Ok(PriceUuid::new()));

        let res = TestClient::post("http://example.com/prices")
            .json(&json!({
                "product": { "description": "Milk 1L" },
                "business": {
                    "place_id": "acme-place",
                    "name": "Acme",
                    "formatted_address": "1 High Street",
                },
                "price": "500",
            }))
            .send(&make_service(prices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_price_missing_fields_returns_400() -> TestResult {
        let mut prices = MockPricesService::new();

        prices.expect_add_price().never();

        let res = TestClient::post("http://example.com/prices")
            .json(&json!({ "product": { "description": "Milk 1L" }, "price": 500 }))
            .send(&make_service(prices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_price_blank_description_returns_400() -> TestResult {
        let mut prices = MockPricesService::new();

        prices.expect_add_price().never();

        let res = TestClient::post("http://example.com/prices")
            .json(&json!({
                "product": { "description": "  " },
                "business": "acme-place",
                "price": 500,
            }))
            .send(&make_service(prices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_price_incomplete_place_returns_422() -> TestResult {
        let mut prices = MockPricesService::new();

        prices.expect_add_price().never();

        let res = TestClient::post("http://example.com/prices")
            .json(&json!({
                "product": { "description": "Milk 1L" },
                "business": { "name": "Acme" },
                "price": 500,
            }))
            .send(&make_service(prices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_price_invalid_price_returns_400() -> TestResult {
        let mut prices = MockPricesService::new();

        prices
            .expect_add_price()
            .once()
            .return_once(|_| Err(InvalidPrice("cheap".to_string()).into()));

        let res = TestClient::post("http://example.com/prices")
            .json(&milk_at_acme(json!("cheap")))
            .send(&make_service(prices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_price_unknown_place_returns_422() -> TestResult {
        let mut prices = MockPricesService::new();

        prices.expect_add_price().once().return_once(|_| {
            Err(PricesServiceError::Places(PlacesError::Rejected {
                status: "NOT_FOUND".to_string(),
                message: None,
            }))
        });

        let res = TestClient::post("http://example.com/prices")
            .json(&milk_at_acme(json!(500)))
            .send(&make_service(prices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_price_not_inserted_returns_500() -> TestResult {
        let mut prices = MockPricesService::new();

        prices
            .expect_add_price()
            .once()
            .return_once(|_| Err(PricesServiceError::NotInserted));

        let res = TestClient::post("http://example.com/prices")
            .json(&milk_at_acme(json!(5.99)))
            .send(&make_service(prices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
