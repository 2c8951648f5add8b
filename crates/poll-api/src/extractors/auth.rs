//! Authentication extractors
//!
//! Extracts the access credential from the Authorization header and the
//! refresh credential from its http-only cookie.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    extract::cookie::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use poll_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Name of the refresh token cookie
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Authenticated user extracted from the access JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the JWT token
    pub user_id: Snowflake,
}

impl AuthUser {
    /// Create a new AuthUser
    #[must_use]
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract user ID from claims
        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthUser::new(user_id))
    }
}

/// Refresh credential extracted from the http-only cookie
///
/// Only proves the cookie was sent; the service layer validates the JWT
/// and the server-side session record.
#[derive(Debug, Clone)]
pub struct RefreshCookie {
    pub token: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for RefreshCookie
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingRefreshCookie)?;

        let token = jar
            .get(REFRESH_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or(ApiError::MissingRefreshCookie)?;

        Ok(RefreshCookie { token })
    }
}
