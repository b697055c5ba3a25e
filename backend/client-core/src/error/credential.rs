use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CredentialError {
    /// Neither the call context nor the configuration supplied a usable credential.
    #[error("Missing Credential Error: {message} {location}")]
    Missing {
        message: String,
        location: ErrorLocation,
    },

    /// A credential exists but the selected handler cannot apply it.
    #[error("Invalid Credential Error: {kind} credential cannot be used by the {handler} handler {location}")]
    Invalid {
        kind: &'static str,
        handler: &'static str,
        location: ErrorLocation,
    },
}

impl CredentialError {
    #[track_caller]
    pub fn missing(message: impl Into<String>) -> Self {
        CredentialError::Missing {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn invalid(kind: &'static str, handler: &'static str) -> Self {
        CredentialError::Invalid {
            kind,
            handler,
            location: ErrorLocation::caller(),
        }
    }
}
