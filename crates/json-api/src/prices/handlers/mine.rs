//! My Prices Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use savvy_app::domain::prices::query::PriceFilter;

use crate::{
    extensions::*,
    prices::{errors::into_status_error, responses::PriceSubmissionsResponse},
    state::State,
};

/// My Prices Handler
///
/// Lists the authenticated user's own price submissions.
#[endpoint(
    tags("prices"),
    summary = "List My Prices",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    limit: QueryParam<u32, false>,
    most_recent: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<PriceSubmissionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let filter = PriceFilter {
        user: Some(user),
        ..PriceFilter::default()
    };

    let query = super::submission_query(filter, limit.into_inner(), most_recent.into_inner())?;

    let submissions = state
        .prices
        .get_submissions(query)
        .await
        .map_err(into_status_error)?;

    Ok(Json(submissions.into()))
}
