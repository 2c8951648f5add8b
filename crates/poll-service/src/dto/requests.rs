//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where input rules exist,
//! `Validate`. The wire format is camelCase JSON.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
///
/// The identifier may be either a username or an email address.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username or email is required"))]
    pub username_or_email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile picture update request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePicRequest {
    #[validate(url(message = "Invalid URL"))]
    pub profile_pic: String,
}

// ============================================================================
// Poll Requests
// ============================================================================

/// Option descriptor for poll creation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewOptionRequest {
    #[validate(length(min = 1, max = 280, message = "Option text must be 1-280 characters"))]
    pub text: String,
}

/// Create poll request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollRequest {
    #[validate(length(min = 1, max = 500, message = "Question must be 1-500 characters"))]
    pub question: String,

    #[validate(length(min = 1, message = "At least one option is required"))]
    #[validate(nested)]
    pub options: Vec<NewOptionRequest>,
}

/// Option descriptor for poll update
///
/// An option carrying the id of an existing option keeps that option
/// (text updated in place); one without an id becomes a new option.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptionRequest {
    /// Existing option ID (Snowflake as string), if updating in place
    pub id: Option<String>,

    #[validate(length(min = 1, max = 280, message = "Option text must be 1-280 characters"))]
    pub text: String,
}

/// Update poll request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePollRequest {
    #[validate(length(min = 1, max = 500, message = "Question must be 1-500 characters"))]
    pub question: String,

    #[validate(length(min = 1, message = "At least one option is required"))]
    #[validate(nested)]
    pub options: Vec<UpdateOptionRequest>,
}

/// Cast vote request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    /// Chosen option ID (Snowflake as string)
    #[validate(length(min = 1, message = "Option ID is required"))]
    pub option_id: String,
}
