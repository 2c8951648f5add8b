//! Poll handlers
//!
//! Poll CRUD, lock state, voting, and the owner-scoped listing.

use axum::{
    extract::{Path, State},
    Json,
};
use poll_service::dto::{
    CreatePollRequest, MessageResponse, PaginatedResponse, PollResponse, PollSummaryResponse,
    UpdatePollRequest, VoteRequest,
};
use poll_service::PollService;

use crate::extractors::{AuthUser, Page, PollIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Read a poll (public, no auth)
///
/// GET /api/poll/:poll_id
pub async fn get_poll(
    State(state): State<AppState>,
    Path(path): Path<PollIdPath>,
) -> ApiResult<Json<PollResponse>> {
    let service = PollService::new(state.service_context());
    let response = service.get(path.poll_id()?).await?;
    Ok(Json(response))
}

/// List the requester's polls, paginated
///
/// GET /api/poll?page=N
pub async fn list_polls(
    State(state): State<AppState>,
    auth: AuthUser,
    page: Page,
) -> ApiResult<Json<PaginatedResponse<PollSummaryResponse>>> {
    let service = PollService::new(state.service_context());
    let response = service.list(auth.user_id, page.0).await?;
    Ok(Json(response))
}

/// Create a poll
///
/// POST /api/poll
pub async fn create_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePollRequest>,
) -> ApiResult<Created<Json<PollResponse>>> {
    let service = PollService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update question and options
///
/// PUT /api/poll/:poll_id
pub async fn update_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PollIdPath>,
    ValidatedJson(request): ValidatedJson<UpdatePollRequest>,
) -> ApiResult<Json<PollResponse>> {
    let service = PollService::new(state.service_context());
    let response = service.update(auth.user_id, path.poll_id()?, request).await?;
    Ok(Json(response))
}

/// Lock a poll against mutation
///
/// PATCH /api/poll/:poll_id/lock
pub async fn lock_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PollIdPath>,
) -> ApiResult<Json<PollResponse>> {
    let service = PollService::new(state.service_context());
    let response = service.lock(auth.user_id, path.poll_id()?).await?;
    Ok(Json(response))
}

/// Unlock a poll
///
/// PATCH /api/poll/:poll_id/unlock
pub async fn unlock_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PollIdPath>,
) -> ApiResult<Json<PollResponse>> {
    let service = PollService::new(state.service_context());
    let response = service.unlock(auth.user_id, path.poll_id()?).await?;
    Ok(Json(response))
}

/// Cast or switch a vote
///
/// PATCH /api/poll/:poll_id/vote
pub async fn vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PollIdPath>,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<Json<PollResponse>> {
    let service = PollService::new(state.service_context());
    let response = service.vote(auth.user_id, path.poll_id()?, request).await?;
    Ok(Json(response))
}

/// Remove the requester's vote
///
/// DELETE /api/poll/:poll_id/clearvote
pub async fn clear_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PollIdPath>,
) -> ApiResult<Json<PollResponse>> {
    let service = PollService::new(state.service_context());
    let response = service.clear_vote(auth.user_id, path.poll_id()?).await?;
    Ok(Json(response))
}

/// Soft-delete a poll
///
/// DELETE /api/poll/:poll_id
pub async fn delete_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PollIdPath>,
) -> ApiResult<Json<MessageResponse>> {
    let service = PollService::new(state.service_context());
    service.delete(auth.user_id, path.poll_id()?).await?;
    Ok(Json(MessageResponse::new("Poll deleted")))
}
