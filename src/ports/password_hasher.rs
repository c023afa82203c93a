//! Password hasher port.

use async_trait::async_trait;
use thiserror::Error;

/// Failures of the hashing backend. A wrong password is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("failed to verify password: {0}")]
    Verify(String),
}

/// One-way password hashing.
///
/// Hashing is deliberately slow; implementations must not block the async
/// runtime.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hashes `password` with a fresh salt.
    async fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Returns `Ok(false)` when `password` does not match `hash`.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}
