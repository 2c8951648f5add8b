//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Request bodies
//! and expected responses mirror the camelCase wire format.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Combines the process start time with a counter so reruns against a
/// persistent database do not collide on unique constraints.
pub fn unique_suffix() -> String {
    let millis = chrono::Utc::now().timestamp_millis() % 1_000_000_000;
    let count = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{millis}x{count}")
}

// ============================================================================
// Auth Fixtures
// ============================================================================

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user{suffix}"),
            email: format!("user{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username_or_email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }

    pub fn by_username(reg: &RegisterRequest) -> Self {
        Self {
            username_or_email: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Authentication response (access token only; refresh lives in a cookie)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub email_verified: bool,
    #[serde(default)]
    pub profile_pic: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// User statistics response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub poll_count: i64,
}

// ============================================================================
// Poll Fixtures
// ============================================================================

/// New option in a poll creation request
#[derive(Debug, Serialize)]
pub struct NewOption {
    pub text: String,
}

/// Create poll request
#[derive(Debug, Serialize)]
pub struct CreatePollRequest {
    pub question: String,
    pub options: Vec<NewOption>,
}

impl CreatePollRequest {
    pub fn cereal() -> Self {
        Self {
            question: "What is the best cereal?".to_string(),
            options: vec![
                NewOption {
                    text: "Corn Flakes".to_string(),
                },
                NewOption {
                    text: "Froot Loops".to_string(),
                },
                NewOption {
                    text: "Granola".to_string(),
                },
            ],
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            question: format!("Question {suffix}?"),
            options: vec![
                NewOption {
                    text: "Yes".to_string(),
                },
                NewOption {
                    text: "No".to_string(),
                },
            ],
        }
    }
}

/// Option entry in a poll update request
#[derive(Debug, Serialize)]
pub struct UpdateOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
}

/// Update poll request
#[derive(Debug, Serialize)]
pub struct UpdatePollRequest {
    pub question: String,
    pub options: Vec<UpdateOption>,
}

/// Vote request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub option_id: String,
}

/// Profile picture update request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePicRequest {
    pub profile_pic: String,
}

/// Poll option with vote count
#[derive(Debug, Deserialize)]
pub struct PollOptionResponse {
    pub id: String,
    pub text: String,
    pub votes: i64,
}

/// Voter entry in a poll response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterResponse {
    pub user_id: String,
    pub option_id: String,
}

/// Owner summary embedded in a poll response
#[derive(Debug, Deserialize)]
pub struct OwnerSummaryResponse {
    pub id: String,
    pub username: String,
}

/// Full poll response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollResponse {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOptionResponse>,
    pub owner: OwnerSummaryResponse,
    pub is_locked: bool,
    pub voters: Vec<VoterResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl PollResponse {
    /// Vote count for the option with the given text
    pub fn votes_for(&self, text: &str) -> i64 {
        self.options
            .iter()
            .find(|o| o.text == text)
            .map(|o| o.votes)
            .unwrap_or(-1)
    }

    /// Option id for the option with the given text
    pub fn option_id(&self, text: &str) -> String {
        self.options
            .iter()
            .find(|o| o.text == text)
            .map(|o| o.id.clone())
            .unwrap_or_default()
    }
}

/// Poll summary in paginated listings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollSummaryResponse {
    pub id: String,
    pub question: String,
    pub is_locked: bool,
    pub updated_at: String,
}

/// Paginated listing response
#[derive(Debug, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub has_more: bool,
}

// ============================================================================
// Common Fixtures
// ============================================================================

/// Plain message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
