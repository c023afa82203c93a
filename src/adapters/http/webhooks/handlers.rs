//! HTTP handler for billing webhooks.

use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::require_api_key;
use crate::adapters::http::state::AppState;
use crate::application::handlers::user::{UpgradeUserCommand, USER_UPGRADED_EVENT};
use crate::domain::foundation::UserId;

use super::dto::PolkaWebhookRequest;

/// POST /api/polka/webhooks - Apply a billing event
///
/// Unknown events are acknowledged with 204 so the provider stops retrying.
pub async fn polka_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<PolkaWebhookRequest>,
) -> Result<impl IntoResponse, ApiError> {
    require_api_key(&headers, state.webhook_key.as_ref())?;

    if request.event != USER_UPGRADED_EVENT {
        tracing::debug!(event = %request.event, "Ignoring billing event");
        return Ok(StatusCode::NO_CONTENT);
    }

    let data = request
        .data
        .ok_or_else(|| ApiError::bad_request("Missing event data"))?;

    let cmd = UpgradeUserCommand {
        event: request.event,
        user_id: UserId::new(data.user_id),
    };
    let outcome = state.upgrade_user_handler().handle(cmd).await?;

    tracing::info!(user_id = data.user_id, ?outcome, "Billing event applied");
    Ok(StatusCode::NO_CONTENT)
}
