//! HS256 JWT implementation of the `TokenService` port.
//!
//! Claims:
//!
//! | claim | value                                   |
//! |-------|-----------------------------------------|
//! | `iss` | purpose tag (`chirpy-access`, ...)      |
//! | `sub` | decimal user id                         |
//! | `iat` | issue instant, Unix seconds             |
//! | `exp` | expiry instant, Unix seconds            |
//!
//! Expiry is checked here rather than by `jsonwebtoken`, whose check is
//! exclusive at the boundary and applies a leeway.

use std::time::Duration;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, Timestamp, TokenPurpose, UserId, VerifiedToken};
use crate::ports::TokenService;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    iss: String,
    sub: String,
    iat: i64,
    exp: i64,
}

/// Signs and verifies tokens with a shared HMAC secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenService {
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            validation,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Token signature mismatch");
                    }
                    _ => {
                        tracing::warn!("Token validation failed: {}", e);
                    }
                }
                AuthError::InvalidToken
            })
    }
}

impl TokenService for JwtTokenService {
    fn issue_at(
        &self,
        user_id: UserId,
        purpose: TokenPurpose,
        ttl: Duration,
        now: Timestamp,
    ) -> Result<String, AuthError> {
        let expires_at = now.plus_secs(ttl.as_secs());
        let claims = Claims {
            iss: purpose.issuer().to_string(),
            sub: user_id.to_string(),
            iat: now.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    fn verify_at(
        &self,
        token: &str,
        expected: TokenPurpose,
        now: Timestamp,
    ) -> Result<VerifiedToken, AuthError> {
        let claims = self.decode_claims(token)?;

        let purpose: TokenPurpose = claims.iss.parse().map_err(|e| {
            tracing::warn!("Unknown token issuer: {}", claims.iss);
            e
        })?;
        if purpose != expected {
            tracing::warn!(%expected, actual = %purpose, "Token used for the wrong purpose");
            return Err(AuthError::WrongPurpose {
                expected,
                actual: purpose,
            });
        }

        if claims.exp <= now.as_unix_secs() {
            tracing::debug!("Token expired");
            return Err(AuthError::TokenExpired);
        }

        let user_id: UserId = claims.sub.parse().map_err(|_| {
            tracing::warn!("Invalid user ID in token: {}", claims.sub);
            AuthError::InvalidSubject
        })?;

        let issued_at = Timestamp::from_unix_secs(claims.iat).ok_or(AuthError::InvalidToken)?;
        let expires_at = Timestamp::from_unix_secs(claims.exp).ok_or(AuthError::InvalidToken)?;

        Ok(VerifiedToken {
            user_id,
            purpose,
            issued_at,
            expires_at,
        })
    }
}

impl std::fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}
