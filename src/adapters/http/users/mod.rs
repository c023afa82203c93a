//! HTTP adapter for user accounts.

mod dto;
mod handlers;
mod routes;

pub use dto::{CredentialsRequest, UserResponse};
pub use routes::user_routes;
