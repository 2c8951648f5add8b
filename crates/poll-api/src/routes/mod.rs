//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{health, polls, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new().merge(user_routes()).merge(poll_routes())
}

/// User and session routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(users::register))
        .route("/user", delete(users::delete_account))
        .route("/user/login", post(users::login))
        .route("/user/logout", delete(users::logout))
        .route("/user/logout/all", delete(users::logout_all))
        .route("/user/refresh", get(users::refresh_token))
        .route("/user/me", get(users::get_current_user))
        .route("/user/me/stats", get(users::get_current_user_stats))
        .route("/user/profilePic", patch(users::update_profile_pic))
}

/// Poll routes
fn poll_routes() -> Router<AppState> {
    Router::new()
        .route("/poll", get(polls::list_polls))
        .route("/poll", post(polls::create_poll))
        .route("/poll/:poll_id", get(polls::get_poll))
        .route("/poll/:poll_id", put(polls::update_poll))
        .route("/poll/:poll_id", delete(polls::delete_poll))
        .route("/poll/:poll_id/lock", patch(polls::lock_poll))
        .route("/poll/:poll_id/unlock", patch(polls::unlock_poll))
        .route("/poll/:poll_id/vote", patch(polls::vote))
        .route("/poll/:poll_id/clearvote", delete(polls::clear_vote))
}
