//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in poll-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod poll;
mod refresh_token;
mod user;

pub use poll::PgPollRepository;
pub use refresh_token::PgRefreshTokenRepository;
pub use user::PgUserRepository;
