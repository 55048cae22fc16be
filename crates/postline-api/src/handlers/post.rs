//! Post handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use postline_entity::post::UpdatePost;

use crate::dto::request::{CreatePostRequest, UpdatePostRequest};
use crate::dto::response::PostResponse;
use crate::error::ApiError;
use crate::extractors::path::IdPath;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/posts
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = state.post_service.list(&auth).await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// POST /api/posts
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let post = state
        .post_service
        .create(&auth, req.title, req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(post.into())))
}

/// GET /api/posts/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<Json<PostResponse>, ApiError> {
    let post = state.post_service.get(&auth, id).await?;
    Ok(Json(post.into()))
}

/// PUT /api/posts/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let changes = UpdatePost {
        title: req.title,
        body: req.content,
    };
    let post = state.post_service.update(&auth, id, changes).await?;
    Ok(Json(post.into()))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.post_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
