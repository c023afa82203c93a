//! Axum router configuration for operator endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{healthz, metrics, reset};
use crate::adapters::http::state::AppState;

/// Create the admin router, mounted at `/admin`.
///
/// # Routes
///
/// - `GET /metrics` - Hit count page
/// - `POST /reset` - Reset hit count
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(metrics))
        .route("/reset", post(reset))
}

/// Health check, merged into `/api`.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/healthz", get(healthz))
}
