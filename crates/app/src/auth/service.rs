//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    auth::{
        ApiTokenUuid, AuthServiceError, IssuedApiToken, NewApiToken, format_api_token,
        generate_api_token_secret, hash_api_token, parse_api_token,
        repository::PgAuthRepository,
    },
    domain::users::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token for the given user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insertion fails.
    pub async fn issue_api_token(&self, user: UserUuid) -> Result<IssuedApiToken, AuthServiceError> {
        let secret = generate_api_token_secret();
        let token = format_api_token(&secret);

        let record = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: ApiTokenUuid::new(),
                user,
                token_hash: hash_api_token(&secret),
            })
            .await?;

        info!(token_uuid = %record.uuid, %user, "issued api token");

        Ok(IssuedApiToken { token, record })
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, uuid: ApiTokenUuid) -> Result<bool, AuthServiceError> {
        let revoked = self.repository.revoke_api_token(uuid).await?.is_some();

        info!(token_uuid = %uuid, revoked, "revoke api token");

        Ok(revoked)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        let secret = parse_api_token(bearer_token).map_err(|error| {
            debug!(%error, "rejected malformed bearer token");

            AuthServiceError::NotFound
        })?;

        self.repository
            .find_user_by_token_hash(&hash_api_token(&secret))
            .await?
            .ok_or(AuthServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer token to the user that owns it.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the Postgres test container"]
    async fn issued_token_authenticates_its_user() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = PgAuthService::new(ctx.db.pool().clone());
        let user = UserUuid::new();

        let issued = auth.issue_api_token(user).await?;

        assert_eq!(issued.record.user, user);
        assert_eq!(auth.authenticate_bearer(&issued.token).await?, user);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the Postgres test container"]
    async fn unknown_token_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = PgAuthService::new(ctx.db.pool().clone());

        let unknown = format_api_token(&generate_api_token_secret());
        let result = auth.authenticate_bearer(&unknown).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        let result = auth.authenticate_bearer("not-a-token").await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a Docker daemon for the Postgres test container"]
    async fn revoked_token_no_longer_authenticates() -> TestResult {
        let ctx = TestContext::new().await;
        let auth = PgAuthService::new(ctx.db.pool().clone());

        let issued = auth.issue_api_token(UserUuid::new()).await?;

        assert!(auth.revoke_api_token(issued.record.uuid).await?);
        assert!(!auth.revoke_api_token(issued.record.uuid).await?);

        let result = auth.authenticate_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
