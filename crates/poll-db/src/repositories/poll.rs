//! PostgreSQL implementation of PollRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use poll_core::entities::Poll;
use poll_core::error::DomainError;
use poll_core::traits::{PollRepository, RepoResult};
use poll_core::value_objects::Snowflake;

use crate::mappers::PollDocument;
use crate::models::PollModel;

use super::error::{map_db_error, poll_not_found};

/// PostgreSQL implementation of PollRepository
#[derive(Clone)]
pub struct PgPollRepository {
    pool: PgPool,
}

impl PgPollRepository {
    /// Create a new PgPollRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn serialize_error(e: serde_json::Error) -> DomainError {
    DomainError::InternalError(format!("Failed to serialize poll document: {e}"))
}

#[async_trait]
impl PollRepository for PgPollRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Poll>> {
        let result = sqlx::query_as::<_, PollModel>(
            r"
            SELECT id, owner_id, question, options, voters, is_locked,
                   created_at, updated_at, deleted_at
            FROM polls
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Poll::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id_with_deleted(&self, id: Snowflake) -> RepoResult<Option<Poll>> {
        let result = sqlx::query_as::<_, PollModel>(
            r"
            SELECT id, owner_id, question, options, voters, is_locked,
                   created_at, updated_at, deleted_at
            FROM polls
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Poll::from))
    }

    #[instrument(skip(self))]
    async fn find_by_owner(
        &self,
        owner_id: Snowflake,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<Poll>> {
        let models = sqlx::query_as::<_, PollModel>(
            r"
            SELECT id, owner_id, question, options, voters, is_locked,
                   created_at, updated_at, deleted_at
            FROM polls
            WHERE owner_id = $1 AND deleted_at IS NULL
            ORDER BY updated_at DESC
            OFFSET $2 LIMIT $3
            ",
        )
        .bind(owner_id.into_inner())
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Poll::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_owner(&self, owner_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM polls WHERE owner_id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(owner_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, poll))]
    async fn create(&self, poll: &Poll) -> RepoResult<()> {
        let doc = PollDocument::new(poll).map_err(serialize_error)?;

        sqlx::query(
            r"
            INSERT INTO polls (id, owner_id, question, options, voters, is_locked,
                               created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(poll.id.into_inner())
        .bind(poll.owner_id.into_inner())
        .bind(&poll.question)
        .bind(doc.options)
        .bind(doc.voters)
        .bind(poll.is_locked)
        .bind(poll.created_at)
        .bind(poll.updated_at)
        .bind(poll.deleted_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, poll))]
    async fn update(&self, poll: &Poll) -> RepoResult<()> {
        let doc = PollDocument::new(poll).map_err(serialize_error)?;

        let result = sqlx::query(
            r"
            UPDATE polls
            SET question = $2, options = $3, voters = $4, is_locked = $5,
                deleted_at = $6, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(poll.id.into_inner())
        .bind(&poll.question)
        .bind(doc.options)
        .bind(doc.voters)
        .bind(poll.is_locked)
        .bind(poll.deleted_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(poll_not_found(poll.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_owner(&self, owner_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM polls WHERE owner_id = $1
            ",
        )
        .bind(owner_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
