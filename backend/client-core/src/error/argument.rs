use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Caller input rejected before any request is built.
#[derive(Debug, ThisError)]
pub enum ArgumentError {
    #[error("Argument Error: {name} cannot be null or empty {location}")]
    Empty {
        name: &'static str,
        location: ErrorLocation,
    },

    #[error("Argument Error: {name} list cannot be empty {location}")]
    EmptyList {
        name: &'static str,
        location: ErrorLocation,
    },

    #[error("Argument Error: {name} '{value}' {reason} {location}")]
    Malformed {
        name: &'static str,
        value: String,
        reason: String,
        location: ErrorLocation,
    },
}

impl ArgumentError {
    #[track_caller]
    pub fn empty(name: &'static str) -> Self {
        ArgumentError::Empty {
            name,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn empty_list(name: &'static str) -> Self {
        ArgumentError::EmptyList {
            name,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn malformed(name: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ArgumentError::Malformed {
            name,
            value: value.into(),
            reason: reason.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            ArgumentError::Empty { name, .. }
            | ArgumentError::EmptyList { name, .. }
            | ArgumentError::Malformed { name, .. } => name,
        }
    }
}
