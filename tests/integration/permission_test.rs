//! Integration tests for role-based access.

use http::StatusCode;

use postline_database::repositories::UserRepository;
use postline_entity::UserRole;

use crate::helpers;

#[tokio::test]
async fn test_user_list_requires_admin() {
    let app = helpers::TestApp::new().await;
    let account = app.register("alice").await;

    let response = app
        .request("GET", "/api/users/all", None, Some(&account.access_token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_promotion_applies_to_existing_token() {
    let app = helpers::TestApp::new().await;
    let account = app.register("alice").await;
    app.register("bob").await;

    let denied = app
        .request("GET", "/api/users/all", None, Some(&account.access_token))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    app.repos
        .users
        .set_role(account.id, UserRole::Admin)
        .await
        .unwrap();

    let allowed = app
        .request("GET", "/api/users/all", None, Some(&account.access_token))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);

    let users = allowed.body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password").is_none()));
}

#[tokio::test]
async fn test_demotion_revokes_admin_access() {
    let app = helpers::TestApp::new().await;
    let admin = app.register_admin("root").await;

    let allowed = app
        .request("GET", "/api/users/all", None, Some(&admin.access_token))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);

    app.repos
        .users
        .set_role(admin.id, UserRole::User)
        .await
        .unwrap();

    let denied = app
        .request("GET", "/api/users/all", None, Some(&admin.access_token))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
}
