//! Axum router configuration for session endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, refresh, revoke};
use crate::adapters::http::state::AppState;

/// Create the session router, merged into `/api`.
///
/// # Routes
///
/// - `POST /login` - Log in
/// - `POST /refresh` - New access token (refresh token)
/// - `POST /revoke` - Revoke refresh token (refresh token)
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/revoke", post(revoke))
}
