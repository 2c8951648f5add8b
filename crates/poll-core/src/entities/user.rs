//! User entity - a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User account entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub email_verified: bool,
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            email_verified: false,
            profile_pic: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the profile picture URL
    pub fn set_profile_pic(&mut self, url: Option<String>) {
        self.profile_pic = url;
        self.updated_at = Utc::now();
    }
}
