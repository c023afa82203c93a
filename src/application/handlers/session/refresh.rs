//! RefreshHandler - Command handler for minting a new access token.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::{AuthError, TokenPurpose};
use crate::domain::session::SessionError;
use crate::ports::{RevocationRepository, TokenService};

/// Command carrying the presented refresh token.
#[derive(Clone)]
pub struct RefreshCommand {
    pub refresh_token: String,
}

impl std::fmt::Debug for RefreshCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshCommand").finish_non_exhaustive()
    }
}

/// Handler for refreshing access tokens.
///
/// A refresh token must verify *and* be absent from the revocation list.
pub struct RefreshHandler {
    tokens: Arc<dyn TokenService>,
    revocations: Arc<dyn RevocationRepository>,
    access_ttl: Duration,
}

impl RefreshHandler {
    pub fn new(
        tokens: Arc<dyn TokenService>,
        revocations: Arc<dyn RevocationRepository>,
        access_ttl: Duration,
    ) -> Self {
        Self {
            tokens,
            revocations,
            access_ttl,
        }
    }

    /// Returns a fresh access token.
    pub async fn handle(&self, cmd: RefreshCommand) -> Result<String, SessionError> {
        let user_id = self
            .tokens
            .validate(&cmd.refresh_token, TokenPurpose::Refresh)?;

        if self.revocations.is_revoked(&cmd.refresh_token).await? {
            tracing::warn!(user_id = %user_id, "Revoked refresh token presented");
            return Err(AuthError::Revoked.into());
        }

        Ok(self
            .tokens
            .issue(user_id, TokenPurpose::Access, self.access_ttl)?)
    }
}
