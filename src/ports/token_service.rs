//! Token service port - issuing and checking signed, time-bound tokens.
//!
//! A token carries a subject (the user id), a purpose and its issue and
//! expiry instants. Checking a token covers signature, purpose, expiry and
//! subject. Revocation is *not* checked here; callers that accept refresh
//! tokens consult the `RevocationRepository` themselves.
//!
//! Expiry is inclusive: a token whose expiry equals "now" is expired. The
//! `*_at` methods take the clock explicitly so the boundary can be tested.

use std::time::Duration;

use crate::domain::foundation::{AuthError, TokenPurpose, Timestamp, UserId, VerifiedToken};

pub trait TokenService: Send + Sync {
    /// Signs a token for `user_id` valid from `now` for `ttl`.
    ///
    /// # Errors
    ///
    /// - `Signing` if the token cannot be encoded
    fn issue_at(
        &self,
        user_id: UserId,
        purpose: TokenPurpose,
        ttl: Duration,
        now: Timestamp,
    ) -> Result<String, AuthError>;

    /// Checks `token` as of `now` and returns its claims.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` on a malformed token or bad signature
    /// - `WrongPurpose` if issued for a different purpose
    /// - `TokenExpired` if its expiry is at or before `now`
    /// - `InvalidSubject` if the subject is not a user id
    fn verify_at(
        &self,
        token: &str,
        expected: TokenPurpose,
        now: Timestamp,
    ) -> Result<VerifiedToken, AuthError>;

    /// Signs a token valid from the current instant.
    fn issue(&self, user_id: UserId, purpose: TokenPurpose, ttl: Duration) -> Result<String, AuthError> {
        self.issue_at(user_id, purpose, ttl, Timestamp::now())
    }

    /// Checks `token` against the current instant.
    fn verify(&self, token: &str, expected: TokenPurpose) -> Result<VerifiedToken, AuthError> {
        self.verify_at(token, expected, Timestamp::now())
    }

    /// Checks `token` as of `now` and returns its subject.
    fn validate_at(
        &self,
        token: &str,
        expected: TokenPurpose,
        now: Timestamp,
    ) -> Result<UserId, AuthError> {
        self.verify_at(token, expected, now).map(|claims| claims.user_id)
    }

    /// Checks `token` against the current instant and returns its subject.
    fn validate(&self, token: &str, expected: TokenPurpose) -> Result<UserId, AuthError> {
        self.validate_at(token, expected, Timestamp::now())
    }
}
