//! User service
//!
//! Profile reads, statistics, profile picture updates, and account deletion.

use poll_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{CurrentUserResponse, StatsResponse, UpdateProfilePicRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the current user's profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Get the current user's poll count
    #[instrument(skip(self))]
    pub async fn get_stats(&self, user_id: Snowflake) -> ServiceResult<StatsResponse> {
        let poll_count = self.ctx.poll_repo().count_by_owner(user_id).await?;

        Ok(StatsResponse { poll_count })
    }

    /// Set the user's profile picture URL after validating it
    ///
    /// The URL must answer a HEAD request with an `image/*` content type
    /// and a content length within the configured cap.
    #[instrument(skip(self, request))]
    pub async fn update_profile_pic(
        &self,
        user_id: Snowflake,
        request: UpdateProfilePicRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        self.validate_image_url(&request.profile_pic).await?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        user.set_profile_pic(Some(request.profile_pic));
        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "Profile picture updated");

        Ok(CurrentUserResponse::from(&user))
    }

    /// Delete the account: the user, their sessions, and their polls
    #[instrument(skip(self))]
    pub async fn delete_account(&self, user_id: Snowflake) -> ServiceResult<()> {
        self.ctx.poll_repo().delete_by_owner(user_id).await?;
        self.ctx
            .refresh_token_repo()
            .delete_all_for_user(user_id)
            .await?;
        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id = %user_id, "Account deleted");
        Ok(())
    }

    /// HEAD the candidate URL and check content type and size
    async fn validate_image_url(&self, url: &str) -> ServiceResult<()> {
        let response = self
            .ctx
            .http_client()
            .head(url)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Profile picture URL unreachable");
                ServiceError::validation("Image URL could not be reached")
            })?;

        if !response.status().is_success() {
            return Err(ServiceError::validation("Image URL returned an error"));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if !content_type.starts_with("image/") {
            return Err(ServiceError::validation("URL does not point to an image"));
        }

        let max_bytes = u64::from(self.ctx.avatar_config().max_size_mb) * 1024 * 1024;
        let content_length = response
            .headers()
            .get(reqwest::header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        if let Some(length) = content_length {
            if length > max_bytes {
                return Err(ServiceError::validation("Image is too large"));
            }
        }

        Ok(())
    }
}
