//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Record store (JSON file or memory) and the repositories on it
//! - `auth` - JWT token service and bcrypt password hashing
//! - `http` - Axum REST API

pub mod auth;
pub mod http;
pub mod storage;

pub use auth::{BcryptPasswordHasher, JwtTokenService};
pub use http::{app_router, AppState};
pub use storage::{FileRecordStore, InMemoryRecordStore};
