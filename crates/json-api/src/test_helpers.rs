//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use savvy_app::{
    auth::MockAuthService,
    domain::{
        businesses::records::{BusinessRecord, BusinessUuid},
        prices::{MockPricesService, models::PriceSubmission, records::PriceUuid},
        products::records::ProductUuid,
        users::UserUuid,
    },
};
use serde_json::json;
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

pub(crate) fn strict_prices_mock() -> MockPricesService {
    let mut prices = MockPricesService::new();

    prices.expect_price_stats().never();
    prices.expect_average_price_per_day().never();
    prices.expect_get_submissions().never();
    prices.expect_get_sanitized_submissions().never();
    prices.expect_add_price().never();

    prices
}

pub(crate) fn state_with_prices(prices: MockPricesService) -> Arc<State> {
    Arc::new(State::new(Arc::new(prices), Arc::new(strict_auth_mock())))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(Arc::new(strict_prices_mock()), Arc::new(auth)))
}

/// Serve `route` with the given prices mock and an authenticated test user.
pub(crate) fn prices_service(prices: MockPricesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_prices(prices)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn make_submission(product: ProductUuid, price: i64) -> PriceSubmission {
    PriceSubmission {
        uuid: PriceUuid::new(),
        product,
        user: Some(TEST_USER_UUID),
        price,
        image: None,
        submitted_at: Timestamp::UNIX_EPOCH,
        business: BusinessRecord {
            uuid: BusinessUuid::new(),
            name: "Acme".to_string(),
            address: "1 High Street".to_string(),
            phone_number: None,
            place_id: "acme-place".to_string(),
            place: json!({ "place_id": "acme-place" }),
            created_at: Timestamp::UNIX_EPOCH,
        },
    }
}

pub(crate) fn make_submission_with_uuid(uuid: PriceUuid) -> PriceSubmission {
    PriceSubmission {
        uuid,
        ..make_submission(ProductUuid::new(), 500)
    }
}
