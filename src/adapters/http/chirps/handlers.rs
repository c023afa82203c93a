//! HTTP handlers for chirp endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::chirp::{CreateChirpCommand, DeleteChirpCommand};
use crate::domain::foundation::ChirpId;

use super::dto::{ChirpResponse, CreateChirpRequest, ListChirpsParams};

/// POST /api/chirps - Post a chirp as the caller
pub async fn create_chirp(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreateChirpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateChirpCommand {
        author_id: user.id,
        body: request.body,
    };

    let chirp = state.create_chirp_handler().handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(ChirpResponse::from(chirp))))
}

/// GET /api/chirps - List chirps, optionally by author and in either order
pub async fn list_chirps(
    State(state): State<AppState>,
    Query(params): Query<ListChirpsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let chirps = state.list_chirps_handler().handle(params.into()).await?;

    let response: Vec<ChirpResponse> = chirps.into_iter().map(ChirpResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/chirps/:chirp_id - Fetch one chirp
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let chirp = state
        .get_chirp_handler()
        .handle(ChirpId::new(chirp_id))
        .await?;

    Ok(Json(ChirpResponse::from(chirp)))
}

/// DELETE /api/chirps/:chirp_id - Delete one of the caller's chirps
pub async fn delete_chirp(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(chirp_id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteChirpCommand {
        chirp_id: ChirpId::new(chirp_id),
        requester: user.id,
    };

    state.delete_chirp_handler().handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}
