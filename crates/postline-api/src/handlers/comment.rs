//! Comment handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::CommentRequest;
use crate::dto::response::CommentResponse;
use crate::error::ApiError;
use crate::extractors::path::IdPath;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/comments/{post_id}/create_comment
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
    ValidatedJson(req): ValidatedJson<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let comment = state
        .comment_service
        .create(&auth, post_id, req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// GET /api/comments/{post_id}
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let comments = state.comment_service.list(&auth, post_id).await?;
    Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}

/// PUT /api/comments/{comment_id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
    ValidatedJson(req): ValidatedJson<CommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    let comment = state
        .comment_service
        .update(&auth, comment_id, req.content)
        .await?;
    Ok(Json(comment.into()))
}

/// DELETE /api/comments/{comment_id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.comment_service.delete(&auth, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
