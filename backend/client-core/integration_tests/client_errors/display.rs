use blockcypher_client::ClientError;
use blockcypher_client::error::{ArgumentError, ConfigError, CredentialError, TransportError};

use common::HttpStatusCode;

use std::error::Error;
use std::io::{Error as IoError, ErrorKind};
use std::path::PathBuf;

/// **VALUE**: Verifies argument errors name the argument and the file they were raised in.
///
/// **WHY THIS MATTERS**: Callers pass several identifiers per call; the message must
/// say which one was rejected.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from the helper,
/// which moves the reported location into `argument.rs`.
#[test]
fn given_empty_argument_error_when_formatted_then_includes_name_and_location() {
    // GIVEN: An error raised here
    let err = ArgumentError::empty("address");

    // WHEN: Formatting the error as string
    let error_string = err.to_string();

    // THEN: Should include type, argument name and this file
    assert!(error_string.contains("Argument Error"));
    assert!(error_string.contains("address cannot be null or empty"));
    assert!(error_string.contains("display.rs"));
}

#[test]
fn given_missing_credential_when_wrapped_then_display_is_transparent() {
    let err: ClientError = CredentialError::missing("Empty or invalid credentials passed").into();

    let error_string = err.to_string();

    assert!(error_string.starts_with("Missing Credential Error: Empty or invalid credentials passed"));
    assert!(error_string.contains("display.rs"));
}

#[test]
fn given_invalid_credential_when_formatted_then_names_kind_and_handler() {
    let err = CredentialError::invalid("certificate", "token");

    assert!(err.to_string().contains("certificate credential cannot be used by the token handler"));
}

#[test]
fn given_status_error_when_formatted_then_includes_code_and_body() {
    let err = TransportError::status(HttpStatusCode(401), r#"{"error":"Unauthorized"}"#);

    let error_string = err.to_string();

    assert!(error_string.contains("HTTP Error: 401"));
    assert!(error_string.contains("Unauthorized"));
    assert_eq!(err.status_code(), Some(HttpStatusCode(401)));
}

/// **VALUE**: Verifies read errors keep the underlying IO error as their source.
///
/// **WHY THIS MATTERS**: "Permission denied" vs "No such file" is the whole diagnosis.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[source]` on `ConfigError::ReadError`.
#[test]
fn given_config_read_error_when_source_requested_then_io_error_returned() {
    let err = ConfigError::ReadError {
        location: common::ErrorLocation::caller(),
        path: PathBuf::from("/etc/blockcypher/sdk_config.toml"),
        source: IoError::new(ErrorKind::PermissionDenied, "permission denied"),
    };

    let source = err.source().expect("ReadError should expose its source");

    assert!(source.to_string().contains("permission denied"));
    assert!(err.to_string().contains("sdk_config.toml"));
}
