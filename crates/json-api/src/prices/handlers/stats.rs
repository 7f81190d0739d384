//! Price Stats Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    prices::{errors::into_status_error, responses::PriceStatsResponse},
    state::State,
};

/// Price Stats Handler
///
/// Average, lowest and highest price of a product. Every value is -1 when no
/// prices have been submitted.
#[endpoint(tags("prices"), summary = "Product Price Statistics")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PriceStatsResponse>, StatusError> {
    let stats = depot
        .obtain_or_500::<Arc<State>>()?
        .prices
        .price_stats(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(stats.into()))
}
