//! Route definitions for the Postline HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and request logging.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration, login, token refresh
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh-token", post(handlers::auth::refresh))
}

/// Account endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::me))
        .route("/users/all", get(handlers::user::list))
}

/// Post CRUD
fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts",
            get(handlers::post::list).post(handlers::post::create),
        )
        .route(
            "/posts/{id}",
            get(handlers::post::get)
                .put(handlers::post::update)
                .delete(handlers::post::delete),
        )
}

/// Comment CRUD
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments/{post_id}/create_comment",
            post(handlers::comment::create),
        )
        // `{id}` is a post id for GET and a comment id for PUT/DELETE.
        .route(
            "/comments/{id}",
            get(handlers::comment::list)
                .put(handlers::comment::update)
                .delete(handlers::comment::delete),
        )
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
