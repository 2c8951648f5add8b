//! User entity <-> model mapper

use poll_core::entities::User;
use poll_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            email_verified: model.email_verified,
            profile_pic: model.profile_pic,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert User entity reference to values for database insertion
pub struct UserInsert<'a> {
    pub id: i64,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub email_verified: bool,
    pub profile_pic: Option<&'a str>,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            id: user.id.into_inner(),
            username: &user.username,
            email: &user.email,
            password_hash,
            email_verified: user.email_verified,
            profile_pic: user.profile_pic.as_deref(),
        }
    }
}
