//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Poll, RefreshToken, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username or email (login identifier)
    async fn find_by_username_or_email(&self, identifier: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Remove a user record entirely
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Poll Repository
// ============================================================================

#[async_trait]
pub trait PollRepository: Send + Sync {
    /// Find a poll by ID, excluding soft-deleted polls
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Poll>>;

    /// Find a poll by ID, including soft-deleted polls
    ///
    /// Used where already-deleted records still matter, e.g. repeating a
    /// delete must succeed rather than report not-found.
    async fn find_by_id_with_deleted(&self, id: Snowflake) -> RepoResult<Option<Poll>>;

    /// Page through a user's polls, newest update first
    async fn find_by_owner(
        &self,
        owner_id: Snowflake,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<Poll>>;

    /// Count a user's polls (excluding soft-deleted)
    async fn count_by_owner(&self, owner_id: Snowflake) -> RepoResult<i64>;

    /// Create a new poll
    async fn create(&self, poll: &Poll) -> RepoResult<()>;

    /// Persist the full poll document (question, options, voters, flags)
    async fn update(&self, poll: &Poll) -> RepoResult<()>;

    /// Remove every poll owned by a user (account-deletion cascade)
    async fn delete_by_owner(&self, owner_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Record a new refresh session
    async fn create(&self, token: &RefreshToken) -> RepoResult<()>;

    /// Find an unexpired session matching user and token
    async fn find_valid(&self, user_id: Snowflake, token: &str) -> RepoResult<Option<RefreshToken>>;

    /// Delete the one session matching user and token
    async fn delete_token(&self, user_id: Snowflake, token: &str) -> RepoResult<()>;

    /// Delete every session for a user
    async fn delete_all_for_user(&self, user_id: Snowflake) -> RepoResult<()>;
}
