//! Integration tests for post CRUD and ownership.

use http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_create_and_get_post() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(serde_json::json!({ "title": "Hello", "content": "First post" })),
            Some(&alice.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["title"], "Hello");
    assert_eq!(response.body["content"], "First post");
    assert_eq!(response.body["author_id"].as_i64(), Some(alice.id));

    let id = response.body["id"].as_i64().unwrap();
    let fetched = app
        .request(
            "GET",
            &format!("/api/posts/{}", id),
            None,
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["id"].as_i64(), Some(id));
}

#[tokio::test]
async fn test_list_posts_visible_to_everyone() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    app.create_post(&alice.access_token, "one").await;
    app.create_post(&alice.access_token, "two").await;

    let response = app
        .request("GET", "/api/posts", None, Some(&bob.access_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let posts = response.body.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["title"], "two");
}

#[tokio::test]
async fn test_create_post_requires_title() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(serde_json::json!({ "title": "", "content": "body" })),
            Some(&alice.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_author_can_update_post() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;
    let id = app.create_post(&alice.access_token, "draft").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/posts/{}", id),
            Some(serde_json::json!({ "title": "final" })),
            Some(&alice.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "final");
    assert_eq!(response.body["content"], "draft body");
}

#[tokio::test]
async fn test_non_author_cannot_update_post() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let id = app.create_post(&alice.access_token, "mine").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/posts/{}", id),
            Some(serde_json::json!({ "title": "stolen" })),
            Some(&bob.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_cannot_update_but_can_delete() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;
    let admin = app.register_admin("root").await;
    let id = app.create_post(&alice.access_token, "spam").await;

    let update = app
        .request(
            "PUT",
            &format!("/api/posts/{}", id),
            Some(serde_json::json!({ "title": "edited" })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request(
            "DELETE",
            &format!("/api/posts/{}", id),
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::NO_CONTENT);

    let fetched = app
        .request(
            "GET",
            &format!("/api/posts/{}", id),
            None,
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stranger_cannot_delete_post() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let id = app.create_post(&alice.access_token, "mine").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/posts/{}", id),
            None,
            Some(&bob.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_post_is_not_found() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;

    let response = app
        .request("DELETE", "/api/posts/999", None, Some(&alice.access_token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;

    let response = app
        .request("GET", "/api/posts/abc", None, Some(&alice.access_token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
