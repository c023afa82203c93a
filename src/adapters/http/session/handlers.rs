//! HTTP handlers for session endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::BearerToken;
use crate::adapters::http::state::AppState;
use crate::application::handlers::session::{LoginCommand, RefreshCommand, RevokeCommand};

use super::dto::{LoginRequest, LoginResponse, TokenResponse};

/// POST /api/login - Exchange credentials for an access and refresh token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = LoginCommand {
        email: request.email,
        password: request.password,
        expires_in_seconds: request.expires_in_seconds,
    };

    let result = state.login_handler().handle(cmd).await?;

    Ok(Json(LoginResponse::from(result)))
}

/// POST /api/refresh - Mint a new access token from a refresh token
pub async fn refresh(
    State(state): State<AppState>,
    BearerToken(refresh_token): BearerToken,
) -> Result<impl IntoResponse, ApiError> {
    let token = state
        .refresh_handler()
        .handle(RefreshCommand { refresh_token })
        .await?;

    Ok(Json(TokenResponse { token }))
}

/// POST /api/revoke - Revoke a refresh token
pub async fn revoke(
    State(state): State<AppState>,
    BearerToken(refresh_token): BearerToken,
) -> Result<impl IntoResponse, ApiError> {
    state
        .revoke_handler()
        .handle(RevokeCommand { refresh_token })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
