//! HTTP adapter for payment-provider webhooks.

mod dto;
mod handlers;
mod routes;

pub use dto::{PolkaWebhookData, PolkaWebhookRequest};
pub use routes::webhook_routes;
