//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod poll;
pub mod user;

// Re-export all services for convenience
pub use auth::{AuthService, LoginOutcome};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use poll::{PollService, PAGE_SIZE};
pub use user::UserService;
