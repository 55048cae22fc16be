//! Integration tests for comments and their delete rules.

use http::StatusCode;

use crate::helpers::{self, TestApp};

async fn comment_on(app: &TestApp, token: &str, post_id: i64, content: &str) -> i64 {
    let response = app
        .request(
            "POST",
            &format!("/api/comments/{}/create_comment", post_id),
            Some(serde_json::json!({ "content": content })),
            Some(token),
        )
        .await;

    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Comment creation failed: {:?}",
        response.body
    );

    response.body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_and_list_comments() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let post_id = app.create_post(&alice.access_token, "topic").await;

    comment_on(&app, &bob.access_token, post_id, "first").await;
    comment_on(&app, &alice.access_token, post_id, "second").await;

    let response = app
        .request(
            "GET",
            &format!("/api/comments/{}", post_id),
            None,
            Some(&bob.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let comments = response.body.as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert!(comments.iter().all(|c| c["post_id"].as_i64() == Some(post_id)));
}

#[tokio::test]
async fn test_comment_on_missing_post_is_not_found() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;

    let response = app
        .request(
            "POST",
            "/api/comments/42/create_comment",
            Some(serde_json::json!({ "content": "hello?" })),
            Some(&alice.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_comment_author_can_update() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let post_id = app.create_post(&alice.access_token, "topic").await;
    let comment_id = comment_on(&app, &bob.access_token, post_id, "typo").await;

    let by_post_author = app
        .request(
            "PUT",
            &format!("/api/comments/{}", comment_id),
            Some(serde_json::json!({ "content": "censored" })),
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(by_post_author.status, StatusCode::FORBIDDEN);

    let by_author = app
        .request(
            "PUT",
            &format!("/api/comments/{}", comment_id),
            Some(serde_json::json!({ "content": "fixed" })),
            Some(&bob.access_token),
        )
        .await;
    assert_eq!(by_author.status, StatusCode::OK);
    assert_eq!(by_author.body["content"], "fixed");
}

#[tokio::test]
async fn test_comment_delete_rules() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let carol = app.register("carol").await;
    let admin = app.register_admin("root").await;
    let post_id = app.create_post(&alice.access_token, "topic").await;

    let first = comment_on(&app, &bob.access_token, post_id, "one").await;
    let second = comment_on(&app, &bob.access_token, post_id, "two").await;
    let third = comment_on(&app, &bob.access_token, post_id, "three").await;

    let stranger = app
        .request(
            "DELETE",
            &format!("/api/comments/{}", first),
            None,
            Some(&carol.access_token),
        )
        .await;
    assert_eq!(stranger.status, StatusCode::FORBIDDEN);

    for (comment_id, token) in [
        (first, &bob.access_token),
        (second, &alice.access_token),
        (third, &admin.access_token),
    ] {
        let response = app
            .request(
                "DELETE",
                &format!("/api/comments/{}", comment_id),
                None,
                Some(token.as_str()),
            )
            .await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
    }

    let remaining = app
        .request(
            "GET",
            &format!("/api/comments/{}", post_id),
            None,
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(remaining.body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_deleting_post_removes_its_comments() {
    let app = helpers::TestApp::new().await;
    let alice = app.register("alice").await;
    let post_id = app.create_post(&alice.access_token, "topic").await;
    let comment_id = comment_on(&app, &alice.access_token, post_id, "note").await;

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/posts/{}", post_id),
            None,
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let response = app
        .request(
            "PUT",
            &format!("/api/comments/{}", comment_id),
            Some(serde_json::json!({ "content": "orphan" })),
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
