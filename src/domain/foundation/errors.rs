//! Error types for the domain layer.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a too-long validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    NotFound,
    Duplicate,
    Unauthorized,
    Forbidden,
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Duplicate => "DUPLICATE",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Failures of the record store itself.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read, written or created.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not contain a valid document.
    #[error("Malformed document: {0}")]
    Format(#[from] serde_json::Error),

    /// The document was written by a newer schema than this build understands.
    #[error("Unsupported document version {found} (newest supported is {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by entity repositories.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record exists for the given key.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A uniqueness constraint would be violated.
    #[error("{entity} with {field} '{value}' already exists")]
    Duplicate {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RepositoryError {
    /// Creates a not-found error for an entity key.
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        RepositoryError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Creates a uniqueness violation error.
    pub fn duplicate(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        RepositoryError::Duplicate {
            entity,
            field,
            value: value.into(),
        }
    }

    /// Returns true if this is a missing-record error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }

    /// Returns true if this is a uniqueness violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, RepositoryError::Duplicate { .. })
    }

    /// Maps the error to its API error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            RepositoryError::NotFound { .. } => ErrorCode::NotFound,
            RepositoryError::Duplicate { .. } => ErrorCode::Duplicate,
            RepositoryError::Store(_) => ErrorCode::StorageError,
        }
    }
}
