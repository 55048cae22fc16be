//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use postline_api::{AppState, build_app};
use postline_api::state::Repositories;
use postline_auth::PasswordHasher;
use postline_core::config::{AppConfig, CorsConfig};
use postline_database::repositories::UserRepository;
use postline_entity::UserRole;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Repositories for direct manipulation
    pub repos: Repositories,
}

/// A registered account and its tokens
#[derive(Debug, Clone)]
pub struct TestAccount {
    /// User ID
    pub id: i64,
    /// Access token
    pub access_token: String,
    /// Refresh token
    pub refresh_token: String,
}

impl TestApp {
    /// Create a new test application over empty in-memory storage
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let repos = Repositories::in_memory();
        let hasher = PasswordHasher::with_params(8, 1, 1).expect("Failed to build hasher");
        let state = AppState::with_hasher(config, repos.clone(), hasher)
            .expect("Failed to build app state");

        Self {
            router: build_app(state, &CorsConfig::default()),
            repos,
        }
    }

    /// Register an account through the API and return its tokens
    pub async fn register(&self, username: &str) -> TestAccount {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "username": username,
                    "email": format!("{}@test.com", username),
                    "password": "password123",
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        TestAccount::from_body(&response.body)
    }

    /// Register an account and promote it to admin
    pub async fn register_admin(&self, username: &str) -> TestAccount {
        let account = self.register(username).await;
        self.repos
            .users
            .set_role(account.id, UserRole::Admin)
            .await
            .expect("Failed to promote user");
        account
    }

    /// Login and return the issued tokens
    pub async fn login(&self, username: &str, password: &str) -> TestAccount {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        TestAccount::from_body(&response.body)
    }

    /// Create a post and return its ID
    pub async fn create_post(&self, token: &str, title: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/posts",
                Some(serde_json::json!({
                    "title": title,
                    "content": format!("{} body", title),
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Post creation failed: {:?}",
            response.body
        );

        response.body["id"].as_i64().expect("No id in post response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let www_authenticate = response
            .headers()
            .get(http::header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            www_authenticate,
        }
    }
}

impl TestAccount {
    fn from_body(body: &Value) -> Self {
        Self {
            id: body["id"].as_i64().expect("No id in token response"),
            access_token: body["access_token"]
                .as_str()
                .expect("No access_token in response")
                .to_string(),
            refresh_token: body["refresh_token"]
                .as_str()
                .expect("No refresh_token in response")
                .to_string(),
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as JSON
    pub body: Value,
    /// `WWW-Authenticate` header, if any
    pub www_authenticate: Option<String>,
}
