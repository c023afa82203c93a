//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `RecordStore` - The single JSON document and its reader/writer lock
//! - `ChirpRepository`, `UserRepository`, `RevocationRepository` - Entity
//!   access built on a `RecordStore`
//!
//! ## Authentication Ports
//!
//! - `TokenService` - Signed, time-bound access and refresh tokens
//! - `PasswordHasher` - One-way password hashing

mod chirp_repository;
mod password_hasher;
mod record_store;
mod revocation_repository;
mod token_service;
mod user_repository;

pub use chirp_repository::ChirpRepository;
pub use password_hasher::{PasswordError, PasswordHasher};
pub use record_store::RecordStore;
pub use revocation_repository::RevocationRepository;
pub use token_service::TokenService;
pub use user_repository::UserRepository;
