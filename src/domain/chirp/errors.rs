//! Chirp-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ChirpId, ErrorCode, RepositoryError, ValidationError};

/// Errors from chirp command and query handlers.
#[derive(Debug, Error)]
pub enum ChirpError {
    /// The body failed validation.
    #[error("Invalid chirp: {0}")]
    Validation(#[from] ValidationError),

    /// The caller is not the chirp's author.
    #[error("Not allowed to modify chirp {0}")]
    Forbidden(ChirpId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ChirpError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ChirpError::Validation(_) => ErrorCode::ValidationFailed,
            ChirpError::Forbidden(_) => ErrorCode::Forbidden,
            ChirpError::Repository(e) => e.code(),
        }
    }

    /// Message safe to show to API clients.
    pub fn message(&self) -> String {
        match self {
            ChirpError::Validation(ValidationError::TooLong { .. }) => {
                "Chirp is too long".to_string()
            }
            ChirpError::Validation(e) => e.to_string(),
            ChirpError::Forbidden(_) => "You can only delete your own chirps".to_string(),
            ChirpError::Repository(RepositoryError::NotFound { .. }) => {
                "Chirp not found".to_string()
            }
            ChirpError::Repository(e) => e.to_string(),
        }
    }
}
