//! Domain entities - core business objects

mod poll;
mod refresh_token;
mod user;

pub use poll::{OptionUpdate, Poll, PollOption, Voter};
pub use refresh_token::RefreshToken;
pub use user::User;
