//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use poll_core::entities::{Poll, PollOption, User, Voter};

use super::responses::{
    CurrentUserResponse, OwnerSummaryResponse, PollOptionResponse, PollResponse,
    PollSummaryResponse, VoterResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            email_verified: user.email_verified,
            profile_pic: user.profile_pic.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for OwnerSummaryResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
        }
    }
}

// ============================================================================
// Poll Mappers
// ============================================================================

impl From<&PollOption> for PollOptionResponse {
    fn from(option: &PollOption) -> Self {
        Self {
            id: option.id.to_string(),
            text: option.text.clone(),
            votes: option.votes,
        }
    }
}

impl From<&Voter> for VoterResponse {
    fn from(voter: &Voter) -> Self {
        Self {
            user_id: voter.user_id.to_string(),
            option_id: voter.option_id.to_string(),
        }
    }
}

impl From<&Poll> for PollSummaryResponse {
    fn from(poll: &Poll) -> Self {
        Self {
            id: poll.id.to_string(),
            question: poll.question.clone(),
            is_locked: poll.is_locked,
            updated_at: poll.updated_at,
        }
    }
}

impl PollResponse {
    /// Build a full poll response with the resolved owner summary
    #[must_use]
    pub fn from_poll(poll: &Poll, owner: &User) -> Self {
        Self {
            id: poll.id.to_string(),
            question: poll.question.clone(),
            options: poll.options.iter().map(PollOptionResponse::from).collect(),
            owner: OwnerSummaryResponse::from(owner),
            is_locked: poll.is_locked,
            voters: poll.voters.iter().map(VoterResponse::from).collect(),
            created_at: poll.created_at,
            updated_at: poll.updated_at,
        }
    }
}
