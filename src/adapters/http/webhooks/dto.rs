//! Payload of billing webhooks.

use serde::Deserialize;

/// Event delivered by the payment provider.
///
/// `data` is only required for events the service acts on.
#[derive(Debug, Clone, Deserialize)]
pub struct PolkaWebhookRequest {
    pub event: String,
    #[serde(default)]
    pub data: Option<PolkaWebhookData>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PolkaWebhookData {
    pub user_id: u64,
}
