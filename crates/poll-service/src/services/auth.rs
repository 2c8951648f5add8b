//! Authentication service
//!
//! Handles user registration, login, token refresh, and logout.

use chrono::{Duration, Utc};
use poll_common::auth::{hash_password, verify_password};
use poll_common::AppError;
use poll_core::entities::{RefreshToken, User};
use poll_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Login outcome: the response body plus the refresh token destined for
/// the http-only cookie
#[derive(Debug)]
pub struct LoginOutcome {
    pub response: AuthResponse,
    pub refresh_token: String,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<CurrentUserResponse> {
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let user = User::new(user_id, request.username, request.email);

        // Unique violations on username/email surface as 409 conflicts
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, "User registered successfully");

        Ok(CurrentUserResponse::from(&user))
    }

    /// Login with username or email plus password
    #[instrument(skip(self, request), fields(identifier = %request.username_or_email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginOutcome> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username_or_email(&request.username_or_email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let access_token = self
            .ctx
            .jwt_service()
            .generate_access_token(&user)
            .map_err(ServiceError::from)?;
        let refresh_token = self
            .ctx
            .jwt_service()
            .generate_refresh_token(&user)
            .map_err(ServiceError::from)?;

        // Persist the refresh session so it can be revoked server-side
        let record = RefreshToken::new(
            self.ctx.generate_id(),
            user.id,
            refresh_token.clone(),
            Utc::now() + Duration::seconds(self.ctx.jwt_service().refresh_token_expiry()),
        );
        self.ctx.refresh_token_repo().create(&record).await?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginOutcome {
            response: AuthResponse::new(
                access_token,
                self.ctx.jwt_service().access_token_expiry(),
                CurrentUserResponse::from(&user),
            ),
            refresh_token,
        })
    }

    /// Exchange a valid refresh token for a new access token
    ///
    /// The token must decode as a refresh JWT and match an unexpired
    /// server-side session record.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(refresh_token)
            .map_err(|_| ServiceError::App(AppError::SessionRejected))?;
        let user_id = claims.user_id().map_err(ServiceError::from)?;

        let record = self
            .ctx
            .refresh_token_repo()
            .find_valid(user_id, refresh_token)
            .await?;
        if record.is_none() {
            warn!(user_id = %user_id, "Refresh rejected: no matching session record");
            return Err(ServiceError::App(AppError::SessionRejected));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let access_token = self
            .ctx
            .jwt_service()
            .generate_access_token(&user)
            .map_err(ServiceError::from)?;

        info!(user_id = %user.id, "Access token refreshed");

        Ok(AuthResponse::new(
            access_token,
            self.ctx.jwt_service().access_token_expiry(),
            CurrentUserResponse::from(&user),
        ))
    }

    /// Logout a single session by deleting its refresh record
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(&self, refresh_token: &str) -> ServiceResult<()> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(refresh_token)
            .map_err(|_| ServiceError::App(AppError::SessionRejected))?;
        let user_id = claims.user_id().map_err(ServiceError::from)?;

        self.ctx
            .refresh_token_repo()
            .delete_token(user_id, refresh_token)
            .await?;

        info!(user_id = %user_id, "Session ended");
        Ok(())
    }

    /// Logout everywhere by deleting every refresh record for the user
    #[instrument(skip(self))]
    pub async fn logout_all(&self, user_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .refresh_token_repo()
            .delete_all_for_user(user_id)
            .await?;

        info!(user_id = %user_id, "All sessions ended");
        Ok(())
    }

    /// Validate an access token and return the user ID
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> ServiceResult<Snowflake> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)?;

        claims.user_id().map_err(ServiceError::from)
    }
}
