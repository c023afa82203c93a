//! User-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, RepositoryError};
use crate::ports::PasswordError;

/// Errors from user command handlers.
#[derive(Debug, Error)]
pub enum UserError {
    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UserError {
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::Password(_) => ErrorCode::InternalError,
            UserError::Repository(e) => e.code(),
        }
    }

    /// Message safe to show to API clients.
    pub fn message(&self) -> String {
        match self {
            UserError::Password(_) => "Couldn't process password".to_string(),
            UserError::Repository(RepositoryError::Duplicate { .. }) => {
                "A user with that email already exists".to_string()
            }
            UserError::Repository(RepositoryError::NotFound { .. }) => {
                "User not found".to_string()
            }
            UserError::Repository(e) => e.to_string(),
        }
    }
}
