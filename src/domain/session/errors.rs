//! Session-specific error types (login, refresh, revoke).

use thiserror::Error;

use crate::domain::foundation::{AuthError, ErrorCode, RepositoryError};
use crate::ports::PasswordError;

/// Errors from session command handlers.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Auth(AuthError::Signing(_)) => ErrorCode::InternalError,
            SessionError::Auth(_) => ErrorCode::Unauthorized,
            SessionError::Password(_) => ErrorCode::InternalError,
            SessionError::Repository(e) => e.code(),
        }
    }

    /// Message safe to show to API clients.
    pub fn message(&self) -> String {
        match self {
            SessionError::Auth(AuthError::Signing(_)) => "Couldn't issue token".to_string(),
            SessionError::Auth(e) => e.to_string(),
            SessionError::Password(_) => "Couldn't process password".to_string(),
            SessionError::Repository(e) => e.to_string(),
        }
    }
}

impl SessionError {
    /// Login must not reveal whether the email exists.
    pub(crate) fn from_login_lookup(err: RepositoryError) -> Self {
        if err.is_not_found() {
            SessionError::Auth(AuthError::InvalidCredentials)
        } else {
            SessionError::Repository(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_email_at_login_looks_like_a_bad_password() {
        let err = SessionError::from_login_lookup(RepositoryError::not_found("user", "a@x.com"));
        assert!(matches!(err, SessionError::Auth(AuthError::InvalidCredentials)));
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[test]
    fn revoked_token_is_unauthorized() {
        assert_eq!(SessionError::from(AuthError::Revoked).code(), ErrorCode::Unauthorized);
    }

    #[test]
    fn signing_failure_is_internal() {
        let err = SessionError::from(AuthError::Signing("bad key".into()));
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(!err.message().contains("bad key"));
    }
}
