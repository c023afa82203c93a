//! HTTP adapter for operator endpoints.

mod handlers;
mod routes;

pub use routes::{admin_routes, health_routes};
