//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthUser, RefreshCookie, REFRESH_COOKIE};
pub use pagination::{Page, PageParams};
pub use path::PollIdPath;
pub use validated::ValidatedJson;
