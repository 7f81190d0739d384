//! Price History Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    prices::{errors::into_status_error, responses::PriceHistoryResponse},
    state::State,
};

/// Price History Handler
///
/// Average price of a product per UTC day, oldest day first.
#[endpoint(tags("prices"), summary = "Product Price History")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PriceHistoryResponse>, StatusError> {
    let days = depot
        .obtain_or_500::<Arc<State>>()?
        .prices
        .average_price_per_day(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(PriceHistoryResponse {
        history: days.into_iter().map(Into::into).collect(),
    }))
}
