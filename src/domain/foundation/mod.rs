//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, authentication vocabulary and the error
//! types shared by every other module.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser, TokenPurpose, VerifiedToken};
pub use errors::{ErrorCode, RepositoryError, StoreError, ValidationError};
pub use ids::{ChirpId, UserId};
pub use timestamp::Timestamp;
