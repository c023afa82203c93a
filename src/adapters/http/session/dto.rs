//! Request and response bodies for session endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::users::UserResponse;
use crate::application::handlers::session::LoginResult;

/// Body of `POST /api/login`.
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub expires_in_seconds: Option<u64>,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("expires_in_seconds", &self.expires_in_seconds)
            .finish_non_exhaustive()
    }
}

/// The logged-in user together with both tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            user: UserResponse::from(result.user),
            token: result.token,
            refresh_token: result.refresh_token,
        }
    }
}

/// Body returned by `POST /api/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_is_flat() {
        let response = LoginResponse {
            user: UserResponse {
                id: 1,
                email: "a@x.com".into(),
                is_chirpy_red: true,
            },
            token: "access".into(),
            refresh_token: "refresh".into(),
        };

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            serde_json::json!({
                "id": 1,
                "email": "a@x.com",
                "is_chirpy_red": true,
                "token": "access",
                "refresh_token": "refresh"
            })
        );
    }

    #[test]
    fn expiry_request_is_optional() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email": "a@x.com", "password": "pw"}"#).unwrap();
        assert_eq!(request.expires_in_seconds, None);
    }
}
