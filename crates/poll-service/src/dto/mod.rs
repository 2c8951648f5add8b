//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreatePollRequest, LoginRequest, NewOptionRequest, RegisterRequest, UpdateOptionRequest,
    UpdatePollRequest, UpdateProfilePicRequest, VoteRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, CurrentUserResponse, HealthResponse, MessageResponse, OwnerSummaryResponse,
    PaginatedResponse, PaginationMeta, PollOptionResponse, PollResponse, PollSummaryResponse,
    StatsResponse, VoterResponse,
};
