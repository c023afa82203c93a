//! Revocation repository port.

use async_trait::async_trait;

use crate::domain::foundation::{RepositoryError, Timestamp};

/// Records refresh tokens that must no longer be honored.
#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Marks `token` revoked as of now. Revoking twice overwrites the record.
    ///
    /// `expires_at` is the token's own expiry; once it passes the record is
    /// dropped by the next sweep. Implementations sweep expired records
    /// inside the same critical section.
    async fn revoke(&self, token: &str, expires_at: Option<Timestamp>) -> Result<(), RepositoryError>;

    /// True iff an active revocation record exists for `token`.
    async fn is_revoked(&self, token: &str) -> Result<bool, RepositoryError>;

    /// Removes records whose token expired at or before `now`.
    ///
    /// Returns the number of records removed.
    async fn prune_expired(&self, now: Timestamp) -> Result<usize, RepositoryError>;
}
