//! Error handling utilities for repositories

use poll_core::error::DomainError;
use poll_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation on the users table to the matching conflict error
///
/// The constraint name tells us which column collided.
pub fn map_user_conflict(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some(name) if name.contains("username") => DomainError::UsernameAlreadyExists,
                _ => DomainError::EmailAlreadyExists,
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "poll not found" error
pub fn poll_not_found(id: Snowflake) -> DomainError {
    DomainError::PollNotFound(id)
}
