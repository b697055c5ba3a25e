//! Errors raised while talking to the API.
//!
//! The status code is stored as-is; this layer never reinterprets it.

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TransportError {
    #[error("Network Error: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {status_code} - {body} {location}")]
    Status {
        status_code: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("HTTP Client Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },
}

impl TransportError {
    #[track_caller]
    pub fn status(status_code: HttpStatusCode, body: impl Into<String>) -> Self {
        TransportError::Status {
            status_code,
            body: body.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        TransportError::Network {
            message: message.into(),
            is_timeout: false,
            is_connection: false,
            location: ErrorLocation::caller(),
        }
    }

    /// Status code of the failed response, if the server answered at all.
    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            TransportError::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            return TransportError::Client {
                message: error.to_string(),
                location: ErrorLocation::caller(),
            };
        }

        TransportError::Network {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::caller(),
        }
    }
}
