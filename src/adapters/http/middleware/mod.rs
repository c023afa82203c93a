//! HTTP middleware and extractors.

pub mod auth;
pub mod metrics;

pub use auth::{bearer_token, require_api_key, BearerToken, RequireAuth};
pub use metrics::{count_hits, HitCounter};
