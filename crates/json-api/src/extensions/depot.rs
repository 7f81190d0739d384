//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use savvy_app::domain::users::UserUuid;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the authenticated user for downstream handlers.
    fn insert_user_uuid(&mut self, user: UserUuid);

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.inject(user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError> {
        self.obtain::<UserUuid>()
            .copied()
            .map_err(|_missing| StatusError::unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn missing_user_is_unauthorized() {
        let depot = Depot::new();

        let result = depot.user_uuid_or_401();

        assert!(
            result.is_err_and(|error| error.code.as_u16() == 401),
            "expected 401 for a depot without a user"
        );
    }

    #[test]
    fn inserted_user_is_returned() {
        let mut depot = Depot::new();
        let user = UserUuid::from_uuid(Uuid::nil());

        depot.insert_user_uuid(user);

        assert_eq!(depot.user_uuid_or_401().ok(), Some(user));
    }
}
