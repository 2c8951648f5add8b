//! Repository traits

mod repositories;

pub use repositories::{
    PollRepository, RefreshTokenRepository, RepoResult, UserRepository,
};
