//! Price Show Handler

use std::{num::NonZeroU32, sync::Arc};

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use savvy_app::domain::prices::query::{PriceFilter, SubmissionQuery};

use crate::{
    extensions::*,
    prices::{errors::into_status_error, responses::PriceSubmissionResponse},
    state::State,
};

/// Price Show Handler
///
/// A single price submission, without the submitting user.
#[endpoint(
    tags("prices"),
    summary = "Get Price",
    responses(
        (status_code = 200, description = "The price submission"),
        (status_code = 404, description = "Price not found"),
        (status_code = 500, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    price: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PriceSubmissionResponse>, StatusError> {
    let query = SubmissionQuery {
        limit: NonZeroU32::new(1),
        ..SubmissionQuery::new(PriceFilter::price(price.into_inner().into()))
    };

    let submission = depot
        .obtain_or_500::<Arc<State>>()?
        .prices
        .get_sanitized_submissions(query)
        .await
        .map_err(into_status_error)?
        .into_iter()
        .next()
        .ok_or_else(StatusError::not_found)?;

    Ok(Json(submission.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use savvy_app::domain::{prices::MockPricesService, products::records::ProductUuid};
    use testresult::TestResult;

    use crate::test_helpers::{make_submission, prices_service};

    use super::*;

    fn make_service(prices: MockPricesService) -> Service {
        prices_service(prices, Router::with_path("prices/{price}").get(handler))
    }

    #[tokio::test]
    async fn test_show_returns_the_sanitized_price() -> TestResult {
        let submission = make_submission(ProductUuid::new(), 500).sanitized();
        let price = submission.uuid;

        let mut prices = MockPricesService::new();

        prices
            .expect_get_sanitized_submissions()
            .once()
            .withf(move |query| {
                query.filter == PriceFilter::price(price) && query.limit == NonZeroU32::new(1)
            })
            .return_once(move |_| Ok(vec![submission]));

        prices.expect_get_submissions().never();

        let response: PriceSubmissionResponse =
            TestClient::get(format!("http://example.com/prices/{price}"))
                .send(&make_service(prices))
                .await
                .take_json()
                .await?;

        assert_eq!(response.price_id, price.into_uuid());
        assert_eq!(response.price, 500);
        assert_eq!(response.user, None);
        assert_eq!(response.business_details.name, "Acme");

        Ok(())
    }

    #[tokio::test]
    async fn test_show_unknown_price_returns_404() -> TestResult {
        let mut prices = MockPricesService::new();

        prices
            .expect_get_sanitized_submissions()
            .once()
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get(format!("http://example.com/prices/{}", Uuid::now_v7()))
            .send(&make_service(prices))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_show_invalid_price_uuid_is_rejected() -> TestResult {
        let mut prices = MockPricesService::new();

        prices.expect_get_sanitized_submissions().never();

        let res = TestClient::get("http://example.com/prices/not-a-uuid")
            .send(&make_service(prices))
            .await;

        assert!(
            res.status_code.is_some_and(|status| status.is_client_error()),
            "expected a client error, got {:?}",
            res.status_code
        );

        Ok(())
    }
}
