//! Price Handlers

use std::num::NonZeroU32;

use salvo::prelude::StatusError;
use savvy_app::domain::prices::query::{PriceFilter, SubmissionQuery};

pub(crate) mod create;
pub(crate) mod history;
pub(crate) mod index;
pub(crate) mod mine;
pub(crate) mod show;
pub(crate) mod stats;

/// Build a listing query from the shared `limit` and `most_recent` parameters.
fn submission_query(
    filter: PriceFilter,
    limit: Option<u32>,
    most_recent: Option<bool>,
) -> Result<SubmissionQuery, StatusError> {
    let limit = limit
        .map(|limit| {
            NonZeroU32::new(limit)
                .ok_or_else(|| StatusError::bad_request().brief("limit must be positive"))
        })
        .transpose()?;

    Ok(SubmissionQuery {
        filter,
        limit,
        most_recent: most_recent.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_to_oldest_first_without_limit() -> TestResult {
        let query = submission_query(PriceFilter::default(), None, None)?;

        assert_eq!(query, SubmissionQuery::new(PriceFilter::default()));

        Ok(())
    }

    #[test]
    fn zero_limit_is_rejected() {
        let result = submission_query(PriceFilter::default(), Some(0), Some(true));

        assert!(
            result.is_err_and(|error| error.code.as_u16() == 400),
            "expected 400 for a zero limit"
        );
    }
}
