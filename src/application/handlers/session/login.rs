//! LoginHandler - Command handler for exchanging credentials for tokens.

use std::sync::Arc;

use super::TokenLifetimes;
use crate::domain::foundation::{AuthError, TokenPurpose};
use crate::domain::session::SessionError;
use crate::domain::user::User;
use crate::ports::{PasswordHasher, TokenService, UserRepository};

/// Credentials presented at login.
#[derive(Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    /// Optional shorter access-token lifetime.
    pub expires_in_seconds: Option<u64>,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("expires_in_seconds", &self.expires_in_seconds)
            .finish_non_exhaustive()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub token: String,
    pub refresh_token: String,
}

/// Handler for logging in.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
    lifetimes: TokenLifetimes,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
        lifetimes: TokenLifetimes,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            lifetimes,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, SessionError> {
        // 1. Find the account; an unknown email looks like a bad password
        let user = self
            .users
            .get_by_email(&cmd.email)
            .await
            .map_err(SessionError::from_login_lookup)?;

        // 2. Check the password
        if !self.hasher.verify(&cmd.password, &user.password_hash).await? {
            tracing::warn!(user_id = %user.id, "Login with incorrect password");
            return Err(AuthError::InvalidCredentials.into());
        }

        // 3. Issue the token pair
        let access_ttl = self.lifetimes.access_for(cmd.expires_in_seconds);
        let token = self.tokens.issue(user.id, TokenPurpose::Access, access_ttl)?;
        let refresh_token = self
            .tokens
            .issue(user.id, TokenPurpose::Refresh, self.lifetimes.refresh)?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(LoginResult {
            user,
            token,
            refresh_token,
        })
    }
}
