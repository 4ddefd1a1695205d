//! Allocation error types.

use rkas_shared::error::AppError;
use rkas_shared::types::AllocationId;
use thiserror::Error;

/// Allocation-related errors.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Allocation not found.
    #[error("Allocation not found: {0}")]
    NotFound(AllocationId),

    /// A required field is missing or empty.
    #[error("Required field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// An amount field is negative.
    #[error("Field '{0}' cannot be negative")]
    NegativeAmount(&'static str),
}

impl From<AllocationError> for AppError {
    fn from(err: AllocationError) -> Self {
        match err {
            AllocationError::NotFound(id) => Self::NotFound(format!("allocation {id}")),
            AllocationError::EmptyField(field) => Self::validation(field, "must not be empty"),
            AllocationError::NegativeAmount(field) => {
                Self::validation(field, "cannot be negative")
            }
        }
    }
}
