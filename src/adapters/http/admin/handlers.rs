//! HTTP handlers for operator endpoints.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse};

use crate::adapters::http::state::AppState;

/// GET /admin/metrics - Static asset hit count
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<html>\n<body>\n<h1>Welcome, Chirpy Admin</h1>\n<p>Chirpy has been visited {} times!</p>\n</body>\n</html>",
        state.hits.get()
    ))
}

/// POST /admin/reset - Zero the hit count
pub async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    state.hits.reset();
    tracing::info!("Hit counter reset");
    "Hits reset to 0"
}

/// GET /api/healthz - Liveness probe
pub async fn healthz() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], "OK")
}
