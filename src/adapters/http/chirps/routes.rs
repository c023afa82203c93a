//! Axum router configuration for chirp endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_chirp, delete_chirp, get_chirp, list_chirps};
use crate::adapters::http::state::AppState;

/// Create the chirp API router, merged into `/api`.
///
/// # Routes
///
/// - `GET /chirps` - List chirps (`?author_id=&sort=asc|desc`)
/// - `POST /chirps` - Post a chirp (access token)
/// - `GET /chirps/:chirp_id` - Fetch one chirp
/// - `DELETE /chirps/:chirp_id` - Delete own chirp (access token)
pub fn chirp_routes() -> Router<AppState> {
    Router::new()
        .route("/chirps", get(list_chirps).post(create_chirp))
        .route("/chirps/:chirp_id", get(get_chirp).delete(delete_chirp))
}
