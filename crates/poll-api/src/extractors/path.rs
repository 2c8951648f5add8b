//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use poll_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with poll_id
#[derive(Debug, serde::Deserialize)]
pub struct PollIdPath {
    pub poll_id: String,
}

impl PollIdPath {
    /// Parse poll_id as Snowflake
    pub fn poll_id(&self) -> Result<Snowflake, ApiError> {
        self.poll_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid poll_id format"))
    }
}
