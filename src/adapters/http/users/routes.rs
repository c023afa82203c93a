//! Axum router configuration for user endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_user, update_user};
use crate::adapters::http::state::AppState;

/// Create the user API router, merged into `/api`.
///
/// # Routes
///
/// - `POST /users` - Register
/// - `PUT /users` - Update own email and password (access token)
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user).put(update_user))
}
