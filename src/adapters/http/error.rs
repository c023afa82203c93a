//! API error type shared by every HTTP handler.
//!
//! Every failure leaves the server as
//!
//! ```json
//! {"error": "<message>", "code": "<ERROR_CODE>"}
//! ```
//!
//! Server-side failures are logged in full and reach the client only as a
//! generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::chirp::ChirpError;
use crate::domain::foundation::{AuthError, ErrorCode, RepositoryError, ValidationError};
use crate::domain::session::SessionError;
use crate::domain::user::UserError;

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    pub code: String,
}

/// An error on its way to becoming an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Logs `detail` and hides it behind a generic message.
    fn internal(code: ErrorCode, detail: &dyn std::fmt::Display) -> Self {
        tracing::error!(code = %code, error = %detail, "Request failed");
        Self::new(code, "Something went wrong")
    }

    fn from_code(code: ErrorCode, message: String, detail: &dyn std::fmt::Display) -> Self {
        match code {
            ErrorCode::StorageError | ErrorCode::InternalError => Self::internal(code, detail),
            _ => Self::new(code, message),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.code)
    }
}

/// HTTP status for each error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Duplicate => StatusCode::CONFLICT,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::StorageError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
            code: self.code.to_string(),
        };
        (status_for(self.code), Json(body)).into_response()
    }
}

impl From<ChirpError> for ApiError {
    fn from(err: ChirpError) -> Self {
        Self::from_code(err.code(), err.message(), &err)
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        Self::from_code(err.code(), err.message(), &err)
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        Self::from_code(err.code(), err.message(), &err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        SessionError::from(err).into()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self::from_code(err.code(), err.to_string(), &err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ChirpId, StoreError};

    async fn body_of(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn codes_map_to_statuses() {
        assert_eq!(status_for(ErrorCode::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::Duplicate), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorCode::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorCode::StorageError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn forbidden_chirp_delete_renders_json() {
        let (status, body) = body_of(ChirpError::Forbidden(ChirpId::new(3)).into()).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.code, "FORBIDDEN");
        assert_eq!(body.error, "You can only delete your own chirps");
    }

    #[tokio::test]
    async fn auth_errors_are_unauthorized() {
        let (status, body) = body_of(AuthError::TokenExpired.into()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.code, "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn storage_failures_hide_details() {
        let err = RepositoryError::from(StoreError::io(
            "/var/lib/chirpy/database.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ));

        let (status, body) = body_of(err.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "STORAGE_ERROR");
        assert!(!body.error.contains("/var/lib"));
    }
}
