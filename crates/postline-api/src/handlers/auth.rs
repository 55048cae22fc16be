//! Auth handlers: register, login, refresh.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use postline_service::{LoginInput, RegisterInput};

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::TokenResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let session = state
        .auth_service
        .register(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let session = state
        .auth_service
        .login(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;
    Ok(Json(session.into()))
}

/// POST /api/auth/refresh-token
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let session = state.auth_service.refresh(&req.refresh_token).await?;
    Ok(Json(session.into()))
}
