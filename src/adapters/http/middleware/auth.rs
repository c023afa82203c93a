//! Authentication extractors for axum.
//!
//! This module provides:
//! - `RequireAuth` - Extractor that requires a valid access token
//! - `BearerToken` - Extractor for the raw bearer credential (refresh/revoke)
//! - `require_api_key` - Check for `Authorization: ApiKey <key>` on webhooks
//!
//! # Header Format
//!
//! ```text
//! Authorization: Bearer <token>
//! Authorization: ApiKey <key>
//! ```
//!
//! A missing header and a malformed one are distinct `AuthError`s; both
//! reach the client as 401.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::{AuthError, AuthenticatedUser, TokenPurpose};

/// Returns the credential of an `Authorization: <scheme> <credential>` header.
///
/// # Errors
///
/// - `MissingHeader` if there is no `Authorization` header
/// - `MalformedHeader` if the scheme differs or the credential is empty
pub fn authorization_credential<'a>(
    headers: &'a HeaderMap,
    scheme: &str,
) -> Result<&'a str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(found), Some(credential), None) if found == scheme => Ok(credential),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Returns the token of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    authorization_credential(headers, "Bearer")
}

/// Extractor that requires a valid access token.
///
/// Refresh tokens are rejected here; they are only good for `/api/refresh`
/// and `/api/revoke`.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireAuth(user): RequireAuth) -> impl IntoResponse {
///     format!("Hello, user {}!", user.id)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let user_id = state.tokens.validate(token, TokenPurpose::Access)?;
        Ok(RequireAuth(AuthenticatedUser::new(user_id)))
    }
}

/// Extractor for the raw bearer credential, unverified.
///
/// Handlers verify it for the purpose they expect.
#[derive(Clone)]
pub struct BearerToken(pub String);

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BearerToken").field(&"[REDACTED]").finish()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(BearerToken(bearer_token(&parts.headers)?.to_string()))
    }
}

/// Checks `Authorization: ApiKey <key>` against the configured key.
///
/// Succeeds without looking at the headers when no key is configured.
pub fn require_api_key(headers: &HeaderMap, expected: Option<&SecretString>) -> Result<(), AuthError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let presented = authorization_credential(headers, "ApiKey")?;
    let matches: bool = presented
        .as_bytes()
        .ct_eq(expected.expose_secret().as_bytes())
        .into();

    if matches {
        Ok(())
    } else {
        tracing::warn!("Webhook presented an incorrect API key");
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Ok("abc.def"));
    }

    #[test]
    fn missing_header_is_reported() {
        assert_eq!(bearer_token(&HeaderMap::new()), Err(AuthError::MissingHeader));
    }

    #[test]
    fn wrong_scheme_or_shape_is_malformed() {
        for value in ["Basic abc", "Bearer", "Bearer a b", "abc"] {
            assert_eq!(
                bearer_token(&headers(value)),
                Err(AuthError::MalformedHeader),
                "{value}"
            );
        }
    }

    #[test]
    fn api_key_not_required_when_unconfigured() {
        assert!(require_api_key(&HeaderMap::new(), None).is_ok());
    }

    #[test]
    fn api_key_must_match() {
        let key = SecretString::new("polka-key".to_string());

        assert!(require_api_key(&headers("ApiKey polka-key"), Some(&key)).is_ok());
        assert_eq!(
            require_api_key(&headers("ApiKey other"), Some(&key)),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            require_api_key(&headers("Bearer polka-key"), Some(&key)),
            Err(AuthError::MalformedHeader)
        );
        assert_eq!(
            require_api_key(&HeaderMap::new(), Some(&key)),
            Err(AuthError::MissingHeader)
        );
    }
}
