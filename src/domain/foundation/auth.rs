//! Authentication types for the domain layer.
//!
//! These types describe who is calling and why a credential was refused.
//! They carry **no signing details**: the `TokenService` port produces and
//! consumes them, whatever the token format underneath.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Timestamp, UserId};

/// What a token may be used for.
///
/// The purpose travels in the token's issuer claim. An access token is never
/// accepted where a refresh token is expected, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenPurpose {
    /// Short-lived credential for mutating API calls.
    Access,
    /// Long-lived credential used only to mint new access tokens.
    Refresh,
}

impl TokenPurpose {
    /// The issuer tag written into tokens of this purpose.
    pub fn issuer(&self) -> &'static str {
        match self {
            TokenPurpose::Access => "chirpy-access",
            TokenPurpose::Refresh => "chirpy-refresh",
        }
    }
}

impl fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.issuer())
    }
}

impl FromStr for TokenPurpose {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chirpy-access" => Ok(TokenPurpose::Access),
            "chirpy-refresh" => Ok(TokenPurpose::Refresh),
            _ => Err(AuthError::InvalidToken),
        }
    }
}

/// Claims of a token that passed signature, purpose and expiry checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub user_id: UserId,
    pub purpose: TokenPurpose,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

/// Caller identity established from a valid access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
}

impl AuthenticatedUser {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}

/// Authentication errors.
///
/// Every variant maps to "401 Unauthorized" at the HTTP boundary; the
/// distinction exists for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header was sent.
    #[error("Authorization header missing")]
    MissingHeader,

    /// The `Authorization` header is not `<scheme> <credential>`.
    #[error("Malformed Authorization header")]
    MalformedHeader,

    /// The token is malformed or its signature does not verify.
    #[error("Invalid token")]
    InvalidToken,

    /// The token's expiry is at or before the current instant.
    #[error("Token expired")]
    TokenExpired,

    /// The token was issued for a different purpose.
    #[error("Token issued for {actual}, expected {expected}")]
    WrongPurpose {
        expected: TokenPurpose,
        actual: TokenPurpose,
    },

    /// The subject claim is not a user id.
    #[error("Token subject is not a valid user id")]
    InvalidSubject,

    /// The refresh token was explicitly revoked.
    #[error("Token has been revoked")]
    Revoked,

    /// Email or password did not match.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// The token could not be signed.
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purpose_round_trips_through_issuer_tag() {
        for purpose in [TokenPurpose::Access, TokenPurpose::Refresh] {
            assert_eq!(purpose.issuer().parse::<TokenPurpose>().unwrap(), purpose);
        }
    }

    #[test]
    fn unknown_issuer_is_an_invalid_token() {
        assert_eq!("access".parse::<TokenPurpose>(), Err(AuthError::InvalidToken));
    }

    #[test]
    fn wrong_purpose_message_names_both_purposes() {
        let err = AuthError::WrongPurpose {
            expected: TokenPurpose::Access,
            actual: TokenPurpose::Refresh,
        };
        assert_eq!(
            err.to_string(),
            "Token issued for chirpy-refresh, expected chirpy-access"
        );
    }
}
