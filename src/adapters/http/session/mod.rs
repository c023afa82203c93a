//! HTTP adapter for login and token lifecycle.

mod dto;
mod handlers;
mod routes;

pub use dto::{LoginRequest, LoginResponse, TokenResponse};
pub use routes::session_routes;
