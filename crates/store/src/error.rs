//! Store error types.

use rkas_shared::error::AppError;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias using `StoreError`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the data access layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id in the collection.
    #[error("No record {id} in collection '{collection}'")]
    NotFound {
        /// Collection name.
        collection: &'static str,
        /// Record id.
        id: Uuid,
    },

    /// A uniqueness constraint was violated on create or replace.
    #[error("Duplicate key '{key}' in collection '{collection}'")]
    Conflict {
        /// Collection name.
        collection: &'static str,
        /// The conflicting unique key.
        key: String,
    },

    /// The backend failed transiently (network/storage); distinct from the
    /// local error kinds, surfaced as-is for the caller to retry.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { collection, id } => {
                Self::NotFound(format!("{collection}/{id}"))
            }
            StoreError::Conflict { .. } => Self::Conflict(err.to_string()),
            StoreError::Unavailable(message) => Self::Unavailable(message),
        }
    }
}
