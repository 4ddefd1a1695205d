//! Activity error types.

use rkas_shared::error::AppError;
use rkas_shared::types::ActivityId;
use thiserror::Error;

/// Activity-related errors.
#[derive(Debug, Error)]
pub enum ActivityError {
    /// Activity not found.
    #[error("Activity not found: {0}")]
    NotFound(ActivityId),

    /// A required field is missing or empty.
    #[error("Required field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// A bucket amount is negative.
    #[error("Amount for {bucket} cannot be negative")]
    NegativeAmount {
        /// Bucket label (e.g., "TW3", "November").
        bucket: String,
    },

    /// The manual total override is negative.
    #[error("Total override cannot be negative")]
    NegativeOverride,

    /// Neither bucket set nor the override carries a positive amount.
    #[error("At least one quarter or month amount must be positive")]
    NoPlannedAmount,
}

impl From<ActivityError> for AppError {
    fn from(err: ActivityError) -> Self {
        match err {
            ActivityError::NotFound(id) => Self::NotFound(format!("activity {id}")),
            ActivityError::EmptyField(field) => Self::validation(field, "must not be empty"),
            ActivityError::NegativeAmount { ref bucket } => {
                Self::validation(bucket.clone(), err.to_string())
            }
            ActivityError::NegativeOverride => Self::validation("total", err.to_string()),
            ActivityError::NoPlannedAmount => Self::validation("amounts", err.to_string()),
        }
    }
}
