//! Service context - dependency container for services
//!
//! Holds all repositories and shared services needed by the application layer.

use std::sync::Arc;
use std::time::Duration;

use poll_common::auth::JwtService;
use poll_common::config::AvatarConfig;
use poll_core::traits::{PollRepository, RefreshTokenRepository, UserRepository};
use poll_core::SnowflakeGenerator;
use poll_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Snowflake generator for ID generation
/// - An outbound HTTP client for profile picture validation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    poll_repo: Arc<dyn PollRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    // Outbound HTTP
    http_client: reqwest::Client,
    avatar_config: AvatarConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    ///
    /// # Panics
    /// Panics if the outbound HTTP client cannot be constructed, which only
    /// happens when the TLS backend fails to initialize.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        poll_repo: Arc<dyn PollRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        avatar_config: AvatarConfig,
    ) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(avatar_config.head_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            pool,
            user_repo,
            poll_repo,
            refresh_token_repo,
            jwt_service,
            snowflake_generator,
            http_client,
            avatar_config,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    #[must_use]
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the poll repository
    #[must_use]
    pub fn poll_repo(&self) -> &dyn PollRepository {
        self.poll_repo.as_ref()
    }

    /// Get the refresh token repository
    #[must_use]
    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    #[must_use]
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    #[must_use]
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    #[must_use]
    pub fn generate_id(&self) -> poll_core::Snowflake {
        self.snowflake_generator.generate()
    }

    // === Outbound HTTP ===

    /// Get the outbound HTTP client
    #[must_use]
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Get the profile picture validation limits
    #[must_use]
    pub fn avatar_config(&self) -> &AvatarConfig {
        &self.avatar_config
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("avatar_config", &self.avatar_config)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    poll_repo: Option<Arc<dyn PollRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    avatar_config: Option<AvatarConfig>,
}

impl ServiceContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    #[must_use]
    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn poll_repo(mut self, repo: Arc<dyn PollRepository>) -> Self {
        self.poll_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    #[must_use]
    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    #[must_use]
    pub fn avatar_config(mut self, config: AvatarConfig) -> Self {
        self.avatar_config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.poll_repo
                .ok_or_else(|| ServiceError::validation("poll_repo is required"))?,
            self.refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.avatar_config
                .ok_or_else(|| ServiceError::validation("avatar_config is required"))?,
        ))
    }
}
