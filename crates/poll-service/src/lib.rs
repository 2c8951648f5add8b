//! # poll-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, LoginOutcome, PollService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService, PAGE_SIZE,
};
