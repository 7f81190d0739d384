//! Price Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use uuid::Uuid;

use savvy_app::domain::prices::query::PriceFilter;

use crate::{
    extensions::*,
    prices::{errors::into_status_error, responses::PriceSubmissionsResponse},
    state::State,
};

/// Price Index Handler
///
/// Lists price submissions for a product and/or business, without the
/// submitting users.
#[endpoint(
    tags("prices"),
    summary = "List Prices",
    responses(
        (status_code = 200, description = "Matching price submissions"),
        (status_code = 400, description = "Neither product nor business given"),
        (status_code = 500, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: QueryParam<Uuid, false>,
    business: QueryParam<Uuid, false>,
    limit: QueryParam<u32, false>,
    most_recent: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<PriceSubmissionsResponse>, StatusError> {
    let filter = PriceFilter {
        product: product.into_inner().map(Into::into),
        business: business.into_inner().map(Into::into),
        ..PriceFilter::default()
    };

    if filter.is_unconstrained() {
        return Err(StatusError::bad_request().brief("product or business is required"));
    }

    let query = super::submission_query(filter, limit.into_inner(), most_recent.into_inner())?;

    let submissions = depot
        .obtain_or_500::<Arc<State>>()?
        .prices
        .get_sanitized_submissions(query)
        .await
        .map_err(into_status_error)?;

    Ok(Json(submissions.into()))
}
