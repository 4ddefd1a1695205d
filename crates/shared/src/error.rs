//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Every module-level error in the workspace converts into one of these
/// kinds before it crosses a crate boundary. The first three are local and
/// recoverable; `Unavailable` marks a transient backend failure the caller
/// may retry (this core never retries itself).
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error on a specific field.
    #[error("Validation error on '{field}': {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Human-readable message.
        message: String,
    },

    /// Conflict (e.g., duplicate reference code).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Backend temporarily unavailable (network/storage failure).
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds a validation error for a named field.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation { .. } => 400,
            Self::Conflict(_) => 409,
            Self::Unavailable(_) => 503,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Unavailable(_) => "UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the caller may retry the failed operation.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::validation("name", "empty").status_code(), 400);
        assert_eq!(AppError::Conflict(String::new()).status_code(), 409);
        assert_eq!(AppError::Unavailable(String::new()).status_code(), 503);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::validation("name", "empty").error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::Conflict(String::new()).error_code(), "CONFLICT");
        assert_eq!(
            AppError::Unavailable(String::new()).error_code(),
            "UNAVAILABLE"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_validation_display_names_field() {
        let err = AppError::validation("nama_kegiatan", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Validation error on 'nama_kegiatan': must not be empty"
        );
    }

    #[test]
    fn test_only_unavailable_is_transient() {
        assert!(AppError::Unavailable("timeout".into()).is_transient());
        assert!(!AppError::NotFound("x".into()).is_transient());
        assert!(!AppError::Conflict("x".into()).is_transient());
        assert!(!AppError::Internal("x".into()).is_transient());
    }
}
