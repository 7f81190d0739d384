//! Result helpers for price handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Turn an unexpected failure into a logged 500.
pub(crate) trait ResultExt<T> {
    /// `action` names what the handler was doing, e.g. `"set location header"`.
    fn or_500(self, action: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, action: &str) -> Result<T, StatusError> {
        self.map_err(|source| {
            error!(action, error = %source, "request failed unexpectedly");

            StatusError::internal_server_error()
        })
    }
}
