//! Poll entity <-> model mapper

use poll_core::entities::Poll;
use poll_core::value_objects::Snowflake;

use crate::models::PollModel;

/// Convert PollModel to Poll entity
impl From<PollModel> for Poll {
    fn from(model: PollModel) -> Self {
        Poll {
            id: Snowflake::new(model.id),
            question: model.question,
            options: model.options.0,
            owner_id: Snowflake::new(model.owner_id),
            is_locked: model.is_locked,
            deleted_at: model.deleted_at,
            voters: model.voters.0,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Serialized JSONB payloads for poll insertion/update
///
/// Serializing up front keeps the serde_json error out of the query
/// builder and lets both columns be bound as plain values.
pub struct PollDocument {
    pub options: serde_json::Value,
    pub voters: serde_json::Value,
}

impl PollDocument {
    /// Build the JSONB payloads from a poll entity
    ///
    /// # Errors
    /// Returns an error if serialization fails (should not happen for
    /// well-formed entities).
    pub fn new(poll: &Poll) -> Result<Self, serde_json::Error> {
        Ok(Self {
            options: serde_json::to_value(&poll.options)?,
            voters: serde_json::to_value(&poll.voters)?,
        })
    }
}
