//! Integration tests for registration, login, token refresh, and bearer auth.

use http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_register_returns_tokens() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "alice",
                "email": "alice@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["username"], "alice");
    assert_eq!(response.body["email"], "alice@test.com");
    assert!(response.body["access_token"].is_string());
    assert!(response.body["refresh_token"].is_string());
    assert!(response.body.get("password").is_none());

    let access_exp = response.body["access_token_expires_at"].as_i64().unwrap();
    assert!(access_exp > unix_now());
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let app = helpers::TestApp::new().await;
    app.register("alice").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "alice",
                "email": "other@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_invalid_email_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "username": "alice",
                "email": "not-an-email",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    let registered = app.register("testuser").await;

    let account = app.login("testuser", "password123").await;
    assert_eq!(account.id, registered.id);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.register("testuser2").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "testuser2",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_nonexistent_user_matches_wrong_password() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_refresh_issues_new_pair() {
    let app = helpers::TestApp::new().await;
    let account = app.register("alice").await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh-token",
            Some(serde_json::json!({ "refresh_token": account.refresh_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"].as_i64(), Some(account.id));

    let new_access = response.body["access_token"].as_str().unwrap();
    assert_ne!(new_access, account.access_token);

    let me = app
        .request("GET", "/api/users/me", None, Some(new_access))
        .await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = helpers::TestApp::new().await;
    let account = app.register("alice").await;

    let response = app
        .request(
            "POST",
            "/api/auth/refresh-token",
            Some(serde_json::json!({ "refresh_token": account.access_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_is_not_a_bearer_credential() {
    let app = helpers::TestApp::new().await;
    let account = app.register("alice").await;

    let response = app
        .request("GET", "/api/users/me", None, Some(&account.refresh_token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_bearer_is_unauthorized() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/posts", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.www_authenticate.as_deref(), Some("Bearer"));
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/users/me", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_returns_profile() {
    let app = helpers::TestApp::new().await;
    let account = app.register("alice").await;

    let response = app
        .request("GET", "/api/users/me", None, Some(&account.access_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"].as_i64(), Some(account.id));
    assert_eq!(response.body["username"], "alice");
    assert_eq!(response.body["role"], "user");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
