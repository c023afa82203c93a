//! RevokeHandler - Command handler for retiring a refresh token.

use std::sync::Arc;

use crate::domain::foundation::TokenPurpose;
use crate::domain::session::SessionError;
use crate::ports::{RevocationRepository, TokenService};

/// Command carrying the refresh token to revoke.
#[derive(Clone)]
pub struct RevokeCommand {
    pub refresh_token: String,
}

impl std::fmt::Debug for RevokeCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevokeCommand").finish_non_exhaustive()
    }
}

pub struct RevokeHandler {
    tokens: Arc<dyn TokenService>,
    revocations: Arc<dyn RevocationRepository>,
}

impl RevokeHandler {
    pub fn new(tokens: Arc<dyn TokenService>, revocations: Arc<dyn RevocationRepository>) -> Self {
        Self {
            tokens,
            revocations,
        }
    }

    /// Revokes a verified refresh token, recording its expiry so the record
    /// can be pruned once the token would have lapsed anyway.
    pub async fn handle(&self, cmd: RevokeCommand) -> Result<(), SessionError> {
        let claims = self
            .tokens
            .verify(&cmd.refresh_token, TokenPurpose::Refresh)?;

        self.revocations
            .revoke(&cmd.refresh_token, Some(claims.expires_at))
            .await?;

        tracing::info!(user_id = %claims.user_id, "Refresh token revoked by owner");
        Ok(())
    }
}
