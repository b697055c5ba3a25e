use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret wrapper is asked to leave the process through serde.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("{kind} refused to serialize; call expose() to pass the raw value {location}")]
    SerializeRefused {
        kind: &'static str,
        location: ErrorLocation,
    },
}

impl RedactError {
    #[track_caller]
    pub fn serialize_refused(kind: &'static str) -> Self {
        RedactError::SerializeRefused {
            kind,
            location: ErrorLocation::caller(),
        }
    }
}
