//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AvatarConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, RateLimitConfig, ServerConfig, SnowflakeConfig,
};
