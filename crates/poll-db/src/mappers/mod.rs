//! Entity <-> database model mappers

mod poll;
mod refresh_token;
mod user;

pub use poll::PollDocument;
pub use user::UserInsert;
