//! Reference data error types.

use rkas_shared::error::AppError;
use thiserror::Error;

/// Reference data validation errors.
#[derive(Debug, Error)]
pub enum RefDataError {
    /// A required field is missing or empty.
    #[error("Required field '{0}' must not be empty")]
    EmptyField(&'static str),
}

impl From<RefDataError> for AppError {
    fn from(err: RefDataError) -> Self {
        match err {
            RefDataError::EmptyField(field) => Self::validation(field, "must not be empty"),
        }
    }
}
