//! Poll service
//!
//! Poll lifecycle: create, read, list, update, lock state, voting, delete.

use poll_core::entities::{OptionUpdate, Poll, User};
use poll_core::error::DomainError;
use poll_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CreatePollRequest, PaginatedResponse, PollResponse, PollSummaryResponse, UpdatePollRequest,
    VoteRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Fixed page size for owner-scoped poll listings
pub const PAGE_SIZE: i64 = 10;

/// Poll service
pub struct PollService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PollService<'a> {
    /// Create a new PollService
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new poll owned by the requester
    #[instrument(skip(self, request), fields(question = %request.question))]
    pub async fn create(
        &self,
        owner_id: Snowflake,
        request: CreatePollRequest,
    ) -> ServiceResult<PollResponse> {
        let owner = self.require_user(owner_id).await?;

        let generator = self.ctx.snowflake_generator();
        let poll = Poll::create(
            self.ctx.generate_id(),
            owner_id,
            request.question,
            request.options.into_iter().map(|o| o.text).collect(),
            || generator.generate(),
        )?;

        self.ctx.poll_repo().create(&poll).await?;

        info!(poll_id = %poll.id, owner_id = %owner_id, "Poll created");

        Ok(PollResponse::from_poll(&poll, &owner))
    }

    /// Read a poll with its resolved owner summary (public, no auth)
    #[instrument(skip(self))]
    pub async fn get(&self, poll_id: Snowflake) -> ServiceResult<PollResponse> {
        let poll = self.require_poll(poll_id).await?;
        let owner = self.require_user(poll.owner_id).await?;

        Ok(PollResponse::from_poll(&poll, &owner))
    }

    /// List the requester's polls, newest update first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        owner_id: Snowflake,
        page: i64,
    ) -> ServiceResult<PaginatedResponse<PollSummaryResponse>> {
        if page < 1 {
            return Err(DomainError::InvalidPage.into());
        }

        let offset = (page - 1) * PAGE_SIZE;
        let polls = self
            .ctx
            .poll_repo()
            .find_by_owner(owner_id, offset, PAGE_SIZE)
            .await?;
        let total = self.ctx.poll_repo().count_by_owner(owner_id).await?;

        let summaries = polls.iter().map(PollSummaryResponse::from).collect();
        Ok(PaginatedResponse::new(summaries, page, PAGE_SIZE, total))
    }

    /// Update question and options (owner-only, rejected while locked)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        requester: Snowflake,
        poll_id: Snowflake,
        request: UpdatePollRequest,
    ) -> ServiceResult<PollResponse> {
        let mut poll = self.require_poll(poll_id).await?;
        poll.ensure_owner(requester)?;

        let submitted = request
            .options
            .into_iter()
            .map(|o| {
                let id = o.id.map(|raw| parse_option_id(&raw)).transpose()?;
                Ok(OptionUpdate { id, text: o.text })
            })
            .collect::<ServiceResult<Vec<_>>>()?;

        let generator = self.ctx.snowflake_generator();
        poll.apply_update(request.question, submitted, || generator.generate())?;

        self.ctx.poll_repo().update(&poll).await?;

        info!(poll_id = %poll_id, "Poll updated");

        let owner = self.require_user(poll.owner_id).await?;
        Ok(PollResponse::from_poll(&poll, &owner))
    }

    /// Lock the poll against mutation (owner-only, idempotent)
    #[instrument(skip(self))]
    pub async fn lock(
        &self,
        requester: Snowflake,
        poll_id: Snowflake,
    ) -> ServiceResult<PollResponse> {
        self.set_lock_state(requester, poll_id, true).await
    }

    /// Unlock the poll (owner-only, idempotent)
    #[instrument(skip(self))]
    pub async fn unlock(
        &self,
        requester: Snowflake,
        poll_id: Snowflake,
    ) -> ServiceResult<PollResponse> {
        self.set_lock_state(requester, poll_id, false).await
    }

    async fn set_lock_state(
        &self,
        requester: Snowflake,
        poll_id: Snowflake,
        locked: bool,
    ) -> ServiceResult<PollResponse> {
        let mut poll = self.require_poll(poll_id).await?;
        poll.ensure_owner(requester)?;

        let changed = if locked { poll.lock() } else { poll.unlock() };

        // Re-locking or re-unlocking succeeds without a write
        if changed {
            self.ctx.poll_repo().update(&poll).await?;
            info!(poll_id = %poll_id, locked, "Poll lock state changed");
        }

        let owner = self.require_user(poll.owner_id).await?;
        Ok(PollResponse::from_poll(&poll, &owner))
    }

    /// Cast or switch the requester's vote
    #[instrument(skip(self, request))]
    pub async fn vote(
        &self,
        requester: Snowflake,
        poll_id: Snowflake,
        request: VoteRequest,
    ) -> ServiceResult<PollResponse> {
        let mut poll = self.require_poll(poll_id).await?;

        let option_id = parse_option_id(&request.option_id)?;
        poll.cast_vote(requester, option_id)?;

        self.ctx.poll_repo().update(&poll).await?;

        info!(poll_id = %poll_id, user_id = %requester, "Vote recorded");

        let owner = self.require_user(poll.owner_id).await?;
        Ok(PollResponse::from_poll(&poll, &owner))
    }

    /// Remove the requester's vote, if any
    #[instrument(skip(self))]
    pub async fn clear_vote(
        &self,
        requester: Snowflake,
        poll_id: Snowflake,
    ) -> ServiceResult<PollResponse> {
        let mut poll = self.require_poll(poll_id).await?;

        let removed = poll.clear_vote(requester)?;
        if removed {
            self.ctx.poll_repo().update(&poll).await?;
            info!(poll_id = %poll_id, user_id = %requester, "Vote cleared");
        }

        let owner = self.require_user(poll.owner_id).await?;
        Ok(PollResponse::from_poll(&poll, &owner))
    }

    /// Soft-delete the poll (owner-only, idempotent)
    #[instrument(skip(self))]
    pub async fn delete(&self, requester: Snowflake, poll_id: Snowflake) -> ServiceResult<()> {
        // Looked up with deleted rows included: repeating a delete is a
        // successful no-op, not a 404.
        let mut poll = self
            .ctx
            .poll_repo()
            .find_by_id_with_deleted(poll_id)
            .await?
            .ok_or_else(|| ServiceError::from(DomainError::PollNotFound(poll_id)))?;
        poll.ensure_owner(requester)?;

        if poll.soft_delete() {
            self.ctx.poll_repo().update(&poll).await?;
            info!(poll_id = %poll_id, "Poll deleted");
        }

        Ok(())
    }

    async fn require_poll(&self, poll_id: Snowflake) -> ServiceResult<Poll> {
        self.ctx
            .poll_repo()
            .find_by_id(poll_id)
            .await?
            .ok_or_else(|| DomainError::PollNotFound(poll_id).into())
    }

    async fn require_user(&self, user_id: Snowflake) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }
}

fn parse_option_id(raw: &str) -> ServiceResult<Snowflake> {
    raw.parse::<Snowflake>()
        .map_err(|_| DomainError::ValidationError(format!("Invalid option ID: {raw}")).into())
}
