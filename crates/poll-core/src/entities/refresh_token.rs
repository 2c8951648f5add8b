//! Refresh token entity - a server-tracked login session

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A persisted refresh credential; one record per active session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Create a new refresh token record
    pub fn new(id: Snowflake, user_id: Snowflake, token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            token,
            expires_at,
            created_at: Utc::now(),
        }
    }

    /// Check if the session has expired
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
