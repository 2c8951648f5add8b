//! Poll database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

use poll_core::entities::{PollOption, Voter};

/// Database model for polls table
///
/// Options and voters are embedded JSONB documents. A poll is always
/// read and written as a whole, so there is no benefit to normalizing
/// them into their own tables.
#[derive(Debug, Clone, FromRow)]
pub struct PollModel {
    pub id: i64,
    pub owner_id: i64,
    pub question: String,
    pub options: Json<Vec<PollOption>>,
    pub voters: Json<Vec<Voter>>,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl PollModel {
    /// Check if poll is soft deleted
    #[inline]
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
