//! User and session handlers
//!
//! Registration, login, logout, token refresh, profile, stats, and
//! account deletion.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use poll_service::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, MessageResponse, RegisterRequest,
    StatsResponse, UpdateProfilePicRequest,
};
use poll_service::{AuthService, UserService};

use crate::extractors::{AuthUser, RefreshCookie, ValidatedJson, REFRESH_COOKIE};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Build the refresh cookie with the session attributes
///
/// `Secure` is set only in production so the cookie still flows over
/// plain HTTP in local development.
fn refresh_cookie(token: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::seconds(max_age_secs))
        .build()
}

/// Remove the refresh cookie (attributes must match the set cookie)
fn clear_refresh_cookie(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build((REFRESH_COOKIE, "")).path("/").build())
}

/// Register a new user
///
/// POST /api/user
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<CurrentUserResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with username or email plus password
///
/// POST /api/user/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<AuthResponse>)> {
    let service = AuthService::new(state.service_context());
    let outcome = service.login(request).await?;

    let jar = jar.add(refresh_cookie(
        outcome.refresh_token,
        state.jwt_service().refresh_token_expiry(),
        state.config().app.env.is_production(),
    ));

    Ok((jar, Json(outcome.response)))
}

/// End the current session
///
/// DELETE /api/user/logout
pub async fn logout(
    State(state): State<AppState>,
    refresh: RefreshCookie,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    let service = AuthService::new(state.service_context());
    service.logout(&refresh.token).await?;

    Ok((
        clear_refresh_cookie(jar),
        Json(MessageResponse::new("Logged out")),
    ))
}

/// End every session for the user
///
/// DELETE /api/user/logout/all
pub async fn logout_all(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    let service = AuthService::new(state.service_context());
    service.logout_all(auth.user_id).await?;

    Ok((
        clear_refresh_cookie(jar),
        Json(MessageResponse::new("Logged out everywhere")),
    ))
}

/// Exchange the refresh cookie for a new access token
///
/// GET /api/user/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    refresh: RefreshCookie,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(&refresh.token).await?;
    Ok(Json(response))
}

/// Get the current user's profile
///
/// GET /api/user/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Get the current user's poll count
///
/// GET /api/user/me/stats
pub async fn get_current_user_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<StatsResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_stats(auth.user_id).await?;
    Ok(Json(response))
}

/// Set the user's profile picture URL
///
/// PATCH /api/user/profilePic
pub async fn update_profile_pic(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfilePicRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile_pic(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete the account, its sessions, and its polls
///
/// DELETE /api/user
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    let service = UserService::new(state.service_context());
    service.delete_account(auth.user_id).await?;

    Ok((
        clear_refresh_cookie(jar),
        Json(MessageResponse::new("Account deleted")),
    ))
}
