//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and log in, returning the credentials and tokens
async fn register_and_login(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/user", &register_req).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/user/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (register_req, auth)
}

/// Create a poll and return the full response
async fn create_poll(server: &TestServer, token: &str, request: &CreatePollRequest) -> PollResponse {
    let response = server.post_auth("/api/poll", token, request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/user", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert_eq!(user.email, request.email);
    assert!(!user.email_verified);
    assert!(user.profile_pic.is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/user", &request).await.unwrap();

    // Same username, different email
    let duplicate = RegisterRequest {
        username: request.username.clone(),
        email: format!("other{}@example.com", unique_suffix()),
        password: request.password.clone(),
    };
    let response = server.post("/api/user", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/user", &request).await.unwrap();

    let duplicate = RegisterRequest {
        username: format!("other{}", unique_suffix()),
        email: request.email.clone(),
        password: request.password.clone(),
    };
    let response = server.post("/api/user", &duplicate).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_short_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/api/user", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_by_email_and_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    server.post("/api/user", &register_req).await.unwrap();

    // By email
    let response = server
        .post("/api/user/login", &LoginRequest::from_register(&register_req))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.token.is_empty());
    assert!(auth.expires_in > 0);

    // By username
    let response = server
        .post("/api/user/login", &LoginRequest::by_username(&register_req))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    server.post("/api/user", &register_req).await.unwrap();

    let login_req = LoginRequest {
        username_or_email: register_req.email.clone(),
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/api/user/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        username_or_email: "nonexistent@example.com".to_string(),
        password: "TestPass123!".to_string(),
    };

    let response = server.post("/api/user/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token_via_cookie() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_and_login(&server).await;

    // The login above stored the refresh cookie in the client jar
    let response = server.get("/api/user/refresh").await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!auth.token.is_empty());
    assert_eq!(auth.user.username, register_req.username);
}

#[tokio::test]
async fn test_refresh_without_cookie() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/user/refresh").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    register_and_login(&server).await;

    let response = server.delete("/api/user/logout").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Cookie was cleared, refresh no longer possible
    let response = server.get("/api/user/refresh").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_all() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;

    let response = server
        .delete_auth("/api/user/logout/all", &auth.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register_and_login(&server).await;

    let response = server.get_auth("/api/user/me", &auth.token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.username, register_req.username);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/user/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_user_stats() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;

    let response = server
        .get_auth("/api/user/me/stats", &auth.token)
        .await
        .unwrap();
    let stats: StatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.poll_count, 0);

    create_poll(&server, &auth.token, &CreatePollRequest::unique()).await;

    let response = server
        .get_auth("/api/user/me/stats", &auth.token)
        .await
        .unwrap();
    let stats: StatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.poll_count, 1);
}

#[tokio::test]
async fn test_update_profile_pic_invalid_url() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;

    let request = UpdateProfilePicRequest {
        profile_pic: "not-a-url".to_string(),
    };
    let response = server
        .patch_auth("/api/user/profilePic", &auth.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;

    // Account owns a poll; deletion must remove it too
    let poll = create_poll(&server, &auth.token, &CreatePollRequest::unique()).await;

    let response = server.delete_auth("/api/user", &auth.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Profile is gone
    let response = server.get_auth("/api/user/me", &auth.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // So is the poll
    let response = server.get(&format!("/api/poll/{}", poll.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Poll Tests
// ============================================================================

#[tokio::test]
async fn test_create_poll() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register_and_login(&server).await;

    let request = CreatePollRequest::cereal();
    let poll = create_poll(&server, &auth.token, &request).await;

    assert_eq!(poll.question, request.question);
    assert_eq!(poll.options.len(), 3);
    assert!(poll.options.iter().all(|o| o.votes == 0));
    assert!(!poll.is_locked);
    assert!(poll.voters.is_empty());
    assert_eq!(poll.owner.id, auth.user.id);
    assert_eq!(poll.owner.username, register_req.username);
}

#[tokio::test]
async fn test_create_poll_without_options() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;

    let request = CreatePollRequest {
        question: "No options?".to_string(),
        options: vec![],
    };
    let response = server.post_auth("/api/poll", &auth.token, &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_poll_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;
    let poll = create_poll(&server, &auth.token, &CreatePollRequest::cereal()).await;

    // No Authorization header
    let response = server.get(&format!("/api/poll/{}", poll.id)).await.unwrap();
    let fetched: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.id, poll.id);
    assert_eq!(fetched.question, poll.question);
}

#[tokio::test]
async fn test_get_poll_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/poll/999999999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_poll_invalid_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/poll/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_vote_and_switch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;
    let poll = create_poll(&server, &auth.token, &CreatePollRequest::cereal()).await;

    // First vote
    let request = VoteRequest {
        option_id: poll.option_id("Corn Flakes"),
    };
    let response = server
        .patch_auth(&format!("/api/poll/{}/vote", poll.id), &auth.token, &request)
        .await
        .unwrap();
    let voted: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(voted.votes_for("Corn Flakes"), 1);
    assert_eq!(voted.voters.len(), 1);

    // Switching overwrites the previous vote
    let request = VoteRequest {
        option_id: poll.option_id("Froot Loops"),
    };
    let response = server
        .patch_auth(&format!("/api/poll/{}/vote", poll.id), &auth.token, &request)
        .await
        .unwrap();
    let switched: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(switched.votes_for("Corn Flakes"), 0);
    assert_eq!(switched.votes_for("Froot Loops"), 1);
    assert_eq!(switched.voters.len(), 1);
}

#[tokio::test]
async fn test_vote_unknown_option() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;
    let poll = create_poll(&server, &auth.token, &CreatePollRequest::cereal()).await;

    let request = VoteRequest {
        option_id: "999999999999999".to_string(),
    };
    let response = server
        .patch_auth(&format!("/api/poll/{}/vote", poll.id), &auth.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_vote_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;
    let poll = create_poll(&server, &auth.token, &CreatePollRequest::cereal()).await;

    let url = format!("{}/api/poll/{}/vote", server.base_url(), poll.id);
    let request = VoteRequest {
        option_id: poll.option_id("Granola"),
    };
    let response = server.client.patch(&url).json(&request).send().await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_non_owner_can_vote() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_and_login(&server).await;
    let poll = create_poll(&server, &owner.token, &CreatePollRequest::cereal()).await;

    let (_, other) = register_and_login(&server).await;
    let request = VoteRequest {
        option_id: poll.option_id("Granola"),
    };
    let response = server
        .patch_auth(&format!("/api/poll/{}/vote", poll.id), &other.token, &request)
        .await
        .unwrap();
    let voted: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(voted.votes_for("Granola"), 1);
}

#[tokio::test]
async fn test_clear_vote() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;
    let poll = create_poll(&server, &auth.token, &CreatePollRequest::cereal()).await;

    let request = VoteRequest {
        option_id: poll.option_id("Corn Flakes"),
    };
    server
        .patch_auth(&format!("/api/poll/{}/vote", poll.id), &auth.token, &request)
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("/api/poll/{}/clearvote", poll.id), &auth.token)
        .await
        .unwrap();
    let cleared: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cleared.votes_for("Corn Flakes"), 0);
    assert!(cleared.voters.is_empty());

    // Clearing again is a no-op, not an error
    let response = server
        .delete_auth(&format!("/api/poll/{}/clearvote", poll.id), &auth.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_lock_blocks_votes_and_updates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;
    let poll = create_poll(&server, &auth.token, &CreatePollRequest::cereal()).await;

    let response = server
        .patch_auth_empty(&format!("/api/poll/{}/lock", poll.id), &auth.token)
        .await
        .unwrap();
    let locked: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(locked.is_locked);

    // Locking an already-locked poll succeeds without change
    let response = server
        .patch_auth_empty(&format!("/api/poll/{}/lock", poll.id), &auth.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Votes are rejected
    let request = VoteRequest {
        option_id: poll.option_id("Corn Flakes"),
    };
    let response = server
        .patch_auth(&format!("/api/poll/{}/vote", poll.id), &auth.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::METHOD_NOT_ALLOWED)
        .await
        .unwrap();

    // So are updates
    let update = UpdatePollRequest {
        question: "Changed?".to_string(),
        options: vec![UpdateOption {
            id: None,
            text: "Only".to_string(),
        }],
    };
    let response = server
        .put_auth(&format!("/api/poll/{}", poll.id), &auth.token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::METHOD_NOT_ALLOWED)
        .await
        .unwrap();

    // Unlock restores voting
    let response = server
        .patch_auth_empty(&format!("/api/poll/{}/unlock", poll.id), &auth.token)
        .await
        .unwrap();
    let unlocked: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!unlocked.is_locked);

    let response = server
        .patch_auth(&format!("/api/poll/{}/vote", poll.id), &auth.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_lock_requires_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_and_login(&server).await;
    let poll = create_poll(&server, &owner.token, &CreatePollRequest::cereal()).await;

    let (_, other) = register_and_login(&server).await;
    let response = server
        .patch_auth_empty(&format!("/api/poll/{}/lock", poll.id), &other.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_update_poll_preserves_votes_on_kept_options() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;
    let poll = create_poll(&server, &auth.token, &CreatePollRequest::cereal()).await;

    // Vote on Corn Flakes
    let request = VoteRequest {
        option_id: poll.option_id("Corn Flakes"),
    };
    server
        .patch_auth(&format!("/api/poll/{}/vote", poll.id), &auth.token, &request)
        .await
        .unwrap();

    // Keep Corn Flakes by id, drop the rest, add a new option
    let update = UpdatePollRequest {
        question: "Best breakfast?".to_string(),
        options: vec![
            UpdateOption {
                id: Some(poll.option_id("Corn Flakes")),
                text: "Corn Flakes".to_string(),
            },
            UpdateOption {
                id: None,
                text: "Toast".to_string(),
            },
        ],
    };
    let response = server
        .put_auth(&format!("/api/poll/{}", poll.id), &auth.token, &update)
        .await
        .unwrap();
    let updated: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.question, "Best breakfast?");
    assert_eq!(updated.options.len(), 2);
    assert_eq!(updated.votes_for("Corn Flakes"), 1);
    assert_eq!(updated.votes_for("Toast"), 0);
    assert_eq!(updated.voters.len(), 1);
}

#[tokio::test]
async fn test_update_poll_drops_votes_on_removed_options() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;
    let poll = create_poll(&server, &auth.token, &CreatePollRequest::cereal()).await;

    let request = VoteRequest {
        option_id: poll.option_id("Corn Flakes"),
    };
    server
        .patch_auth(&format!("/api/poll/{}/vote", poll.id), &auth.token, &request)
        .await
        .unwrap();

    // Replace every option; the vote has nowhere to land
    let update = UpdatePollRequest {
        question: poll.question.clone(),
        options: vec![UpdateOption {
            id: None,
            text: "Fresh start".to_string(),
        }],
    };
    let response = server
        .put_auth(&format!("/api/poll/{}", poll.id), &auth.token, &update)
        .await
        .unwrap();
    let updated: PollResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // The stale voter entry stays but no longer contributes to any tally
    assert_eq!(updated.voters.len(), 1);
    assert_eq!(updated.votes_for("Fresh start"), 0);
}

#[tokio::test]
async fn test_update_requires_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_and_login(&server).await;
    let poll = create_poll(&server, &owner.token, &CreatePollRequest::cereal()).await;

    let (_, other) = register_and_login(&server).await;
    let update = UpdatePollRequest {
        question: "Hijacked?".to_string(),
        options: vec![UpdateOption {
            id: None,
            text: "Yes".to_string(),
        }],
    };
    let response = server
        .put_auth(&format!("/api/poll/{}", poll.id), &other.token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_delete_poll() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;
    let poll = create_poll(&server, &auth.token, &CreatePollRequest::cereal()).await;

    let response = server
        .delete_auth(&format!("/api/poll/{}", poll.id), &auth.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Soft-deleted polls are invisible
    let response = server.get(&format!("/api/poll/{}", poll.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Deleting again is an idempotent no-op
    let response = server
        .delete_auth(&format!("/api/poll/{}", poll.id), &auth.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Still invisible afterwards
    let response = server.get(&format!("/api/poll/{}", poll.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_requires_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_and_login(&server).await;
    let poll = create_poll(&server, &owner.token, &CreatePollRequest::cereal()).await;

    let (_, other) = register_and_login(&server).await;
    let response = server
        .delete_auth(&format!("/api/poll/{}", poll.id), &other.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Listing and Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_list_polls() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;

    for _ in 0..3 {
        create_poll(&server, &auth.token, &CreatePollRequest::unique()).await;
    }

    let response = server.get_auth("/api/poll", &auth.token).await.unwrap();
    let listing: PaginatedResponse<PollSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listing.pagination.page, 1);
    assert_eq!(listing.pagination.page_size, 10);
    assert_eq!(listing.pagination.total_items, 3);
    assert_eq!(listing.data.len(), 3);
    assert!(!listing.pagination.has_more);
}

#[tokio::test]
async fn test_list_polls_crosses_page_boundary() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;

    for _ in 0..12 {
        create_poll(&server, &auth.token, &CreatePollRequest::unique()).await;
    }

    let response = server.get_auth("/api/poll?page=1", &auth.token).await.unwrap();
    let first: PaginatedResponse<PollSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(first.data.len(), 10);
    assert_eq!(first.pagination.page, 1);
    assert_eq!(first.pagination.total_items, 12);
    assert_eq!(first.pagination.total_pages, 2);
    assert!(first.pagination.has_more);

    let response = server.get_auth("/api/poll?page=2", &auth.token).await.unwrap();
    let second: PaginatedResponse<PollSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(second.data.len(), 2);
    assert_eq!(second.pagination.page, 2);
    assert!(!second.pagination.has_more);

    // The two pages partition the listing
    let first_ids: Vec<&str> = first.data.iter().map(|p| p.id.as_str()).collect();
    assert!(second.data.iter().all(|p| !first_ids.contains(&p.id.as_str())));
}

#[tokio::test]
async fn test_list_polls_excludes_other_owners() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_and_login(&server).await;
    create_poll(&server, &owner.token, &CreatePollRequest::unique()).await;

    let (_, other) = register_and_login(&server).await;
    let response = server.get_auth("/api/poll", &other.token).await.unwrap();
    let listing: PaginatedResponse<PollSummaryResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(listing.data.is_empty());
}

#[tokio::test]
async fn test_list_polls_invalid_page() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_and_login(&server).await;

    let response = server.get_auth("/api/poll?page=0", &auth.token).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get_auth("/api/poll?page=abc", &auth.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_polls_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/poll").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
