//! PostgreSQL implementation of RefreshTokenRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use poll_core::entities::RefreshToken;
use poll_core::traits::{RefreshTokenRepository, RepoResult};
use poll_core::value_objects::Snowflake;

use crate::models::RefreshTokenModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RefreshTokenRepository
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new PgRefreshTokenRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    #[instrument(skip(self, token))]
    async fn create(&self, token: &RefreshToken) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO refresh_tokens (id, user_id, token, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(token.id.into_inner())
        .bind(token.user_id.into_inner())
        .bind(&token.token)
        .bind(token.expires_at)
        .bind(token.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn find_valid(
        &self,
        user_id: Snowflake,
        token: &str,
    ) -> RepoResult<Option<RefreshToken>> {
        let result = sqlx::query_as::<_, RefreshTokenModel>(
            r"
            SELECT id, user_id, token, expires_at, created_at
            FROM refresh_tokens
            WHERE user_id = $1 AND token = $2 AND expires_at > NOW()
            ",
        )
        .bind(user_id.into_inner())
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RefreshToken::from))
    }

    #[instrument(skip(self, token))]
    async fn delete_token(&self, user_id: Snowflake, token: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM refresh_tokens WHERE user_id = $1 AND token = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all_for_user(&self, user_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM refresh_tokens WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
