//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Poll not found: {0}")]
    PollNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Poll question must not be empty")]
    EmptyQuestion,

    #[error("Poll must have at least one option")]
    NoOptions,

    #[error("Option text must not be empty")]
    EmptyOptionText,

    #[error("Option not found in poll: {0}")]
    UnknownOption(Snowflake),

    #[error("Page number must be a positive integer")]
    InvalidPage,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the poll owner")]
    NotPollOwner,

    // =========================================================================
    // State Conflicts
    // =========================================================================
    #[error("Poll is locked")]
    PollLocked,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PollNotFound(_) => "UNKNOWN_POLL",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyQuestion => "EMPTY_QUESTION",
            Self::NoOptions => "NO_OPTIONS",
            Self::EmptyOptionText => "EMPTY_OPTION_TEXT",
            Self::UnknownOption(_) => "UNKNOWN_OPTION",
            Self::InvalidPage => "INVALID_PAGE",

            // Authorization
            Self::NotPollOwner => "NOT_POLL_OWNER",

            // State
            Self::PollLocked => "POLL_LOCKED",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::PollNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyQuestion
                | Self::NoOptions
                | Self::EmptyOptionText
                | Self::UnknownOption(_)
                | Self::InvalidPage
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPollOwner)
    }

    /// Check if this is a state conflict (a valid request blocked by the
    /// current state of the resource, e.g. a locked poll)
    pub fn is_state_conflict(&self) -> bool {
        matches!(self, Self::PollLocked)
    }

    /// Check if this is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists | Self::EmailAlreadyExists)
    }
}
