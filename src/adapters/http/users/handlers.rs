//! HTTP handlers for user endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::user::{CreateUserCommand, UpdateUserCommand};

use super::dto::{CredentialsRequest, UserResponse};

/// POST /api/users - Register
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateUserCommand {
        email: request.email,
        password: request.password,
    };

    let user = state.create_user_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /api/users - Change the caller's email and password
pub async fn update_user(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateUserCommand {
        user_id: user.id,
        email: request.email,
        password: request.password,
    };

    let user = state.update_user_handler().handle(cmd).await?;

    Ok(Json(UserResponse::from(user)))
}
