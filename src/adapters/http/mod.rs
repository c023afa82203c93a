//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own adapter module with `dto`, `handlers` and
//! `routes`. `app_router` assembles them:
//!
//! ```text
//! /api/...    chirps, users, sessions, webhooks, health
//! /admin/...  hit-count metrics and reset
//! /app/...    static files, counted by the hit counter
//! ```

pub mod admin;
pub mod chirps;
pub mod error;
pub mod middleware;
pub mod session;
pub mod state;
pub mod users;
pub mod webhooks;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// Builds the Axum router with all routes and shared state.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(chirps::chirp_routes())
        .merge(users::user_routes())
        .merge(session::session_routes())
        .merge(webhooks::webhook_routes())
        .merge(admin::health_routes());

    let assets = Router::new()
        .nest_service("/app", ServeDir::new(&server.static_dir))
        .layer(axum::middleware::from_fn_with_state(
            state.hits.clone(),
            middleware::count_hits,
        ));

    Router::new()
        .nest("/api", api)
        .nest("/admin", admin::admin_routes())
        .merge(assets)
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}
