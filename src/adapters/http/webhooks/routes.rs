//! Axum router configuration for webhook endpoints.

use axum::{routing::post, Router};

use super::handlers::polka_webhook;
use crate::adapters::http::state::AppState;

/// Create the webhook router, merged into `/api`.
///
/// # Routes
///
/// - `POST /polka/webhooks` - Billing events (`Authorization: ApiKey <key>`)
pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/polka/webhooks", post(polka_webhook))
}
