//! IDT error types.

use thiserror::Error;

use crate::profile::ProfileAttribute;
use crate::storage::StorageError;

/// Errors that can occur while scoring or maintaining IDT history.
#[derive(Debug, Error)]
pub enum IdtError {
    /// The profile lacks data the formula needs.
    #[error("Profile {0} is not set; set weight and gender before calculating IDT")]
    MissingProfileAttribute(ProfileAttribute),

    /// The ergometer time is missing, malformed or not positive.
    #[error("Invalid ergometer time: {0}")]
    InvalidTimeInput(String),

    /// The profile weight is not a positive number.
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for IDT operations.
pub type IdtResult<T> = Result<T, IdtError>;
