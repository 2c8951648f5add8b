//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility,
//! and the wire format is camelCase.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Paginated response with page-based pagination
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    #[must_use]
    pub fn new(data: Vec<T>, page: i64, page_size: i64, total_items: i64) -> Self {
        let total_pages = if total_items == 0 {
            0
        } else {
            (total_items + page_size - 1) / page_size
        };

        Self {
            data,
            pagination: PaginationMeta {
                page,
                page_size,
                total_items,
                total_pages,
                has_more: page < total_pages,
            },
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// 1-based page number
    pub page: i64,
    /// Page size used
    pub page_size: i64,
    /// Total number of items across all pages
    pub total_items: i64,
    /// Total number of pages
    pub total_pages: i64,
    /// Whether more pages exist
    pub has_more: bool,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the access token
///
/// The refresh token never appears in a response body; it travels only in
/// the http-only cookie.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    #[must_use]
    pub fn new(token: String, expires_in: i64, user: CurrentUserResponse) -> Self {
        Self {
            token,
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Owner summary embedded in poll responses (id + username only)
#[derive(Debug, Clone, Serialize)]
pub struct OwnerSummaryResponse {
    pub id: String,
    pub username: String,
}

/// User statistics response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub poll_count: i64,
}

// ============================================================================
// Poll Responses
// ============================================================================

/// Poll option with current vote count
#[derive(Debug, Clone, Serialize)]
pub struct PollOptionResponse {
    pub id: String,
    pub text: String,
    pub votes: i64,
}

/// Voter entry in a full poll response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterResponse {
    pub user_id: String,
    pub option_id: String,
}

/// Full poll response with resolved owner summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollResponse {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOptionResponse>,
    pub owner: OwnerSummaryResponse,
    pub is_locked: bool,
    pub voters: Vec<VoterResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Poll summary for paginated owner listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollSummaryResponse {
    pub id: String,
    pub question: String,
    pub is_locked: bool,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
