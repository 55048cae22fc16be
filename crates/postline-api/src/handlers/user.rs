//! User handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.me(&auth).await?;
    Ok(Json(user.into()))
}

/// GET /api/users/all
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service.list(&auth).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
