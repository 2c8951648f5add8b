//! Database models with SQLx FromRow derives

mod poll;
mod refresh_token;
mod user;

pub use poll::PollModel;
pub use refresh_token::RefreshTokenModel;
pub use user::UserModel;
