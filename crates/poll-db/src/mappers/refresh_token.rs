//! Refresh token entity <-> model mapper

use poll_core::entities::RefreshToken;
use poll_core::value_objects::Snowflake;

use crate::models::RefreshTokenModel;

/// Convert RefreshTokenModel to RefreshToken entity
impl From<RefreshTokenModel> for RefreshToken {
    fn from(model: RefreshTokenModel) -> Self {
        RefreshToken {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            token: model.token,
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}
