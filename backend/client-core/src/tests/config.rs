use crate::config::{
    DEFAULT_CHAIN, DEFAULT_COIN, DEFAULT_ENDPOINT, SdkConfig,
};
use crate::error::ConfigError;

use std::fs;
use std::time::Duration;

use tempfile::TempDir;

// ============================================
// DEFAULTS AND PARSING
// ============================================

/// **VALUE**: Verifies an empty file yields a usable mainnet config.
///
/// **WHY THIS MATTERS**: Every field has a default; users only write what they change.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]` turning an
/// absent section into a parse error.
#[test]
fn given_empty_toml_when_parsed_then_defaults_apply() {
    let config = SdkConfig::from_toml_str("").unwrap();

    assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.api.coin, DEFAULT_COIN);
    assert_eq!(config.api.chain, DEFAULT_CHAIN);
    assert_eq!(config.http.timeout(), Duration::from_secs(30));
    assert_eq!(config.api.base_chain_path(None, None), "/v1/btc/main");
}

#[test]
fn given_partial_sections_when_parsed_then_only_given_fields_change() {
    let config = SdkConfig::from_toml_str(
        r#"
        default_account = "acct2"

        [api]
        chain = "test3"

        [http]
        timeout_secs = 5
        "#,
    )
    .unwrap();

    assert_eq!(config.api.base_chain_path(None, None), "/v1/btc/test3");
    assert_eq!(config.http.timeout_secs, 5);
    assert_eq!(config.default_account.as_deref(), Some("acct2"));
}

#[test]
fn given_chain_override_when_base_chain_path_then_uses_override() {
    let config = SdkConfig::default();

    assert_eq!(
        config.api.base_chain_path(Some("bcy"), Some("test")),
        "/v1/bcy/test"
    );
}

#[test]
fn given_malformed_toml_when_parsed_then_parse_error() {
    let err = SdkConfig::from_toml_str("[api\nendpoint = ").unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
}

// ============================================
// VALIDATION
// ============================================

#[test]
fn given_non_http_endpoint_when_validated_then_validation_error() {
    let err = SdkConfig::from_toml_str("[api]\nendpoint = \"ftp://x\"").unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("ftp://x"));
}

/// **VALUE**: Verifies path components that would corrupt every URL are rejected early.
///
/// **BUG THIS CATCHES**: Would catch `chain = "main/extra"` producing requests
/// to the wrong resource, or a blank coin producing `/v1//main`.
#[test]
fn given_bad_path_components_when_validated_then_validation_error() {
    for text in [
        "[api]\ncoin = \"\"",
        "[api]\nchain = \"main/extra\"",
        "[api]\nversion = \"  \"",
        "[http]\ntimeout_secs = 0",
        "[http]\nuser_agent = \"\"",
    ] {
        assert!(
            matches!(
                SdkConfig::from_toml_str(text),
                Err(ConfigError::ValidationError { .. })
            ),
            "expected validation error for {text:?}"
        );
    }
}

// ============================================
// FILE LOADING
// ============================================

#[test]
fn given_missing_file_when_loaded_then_read_error() {
    let dir = TempDir::new().unwrap();

    let err = SdkConfig::load(&dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadError { .. }));
}

/// **VALUE**: Verifies a relative `credentials_path` resolves next to the config file.
///
/// **WHY THIS MATTERS**: Config and credentials usually ship side by side; the
/// process working directory is arbitrary.
///
/// **BUG THIS CATCHES**: Would catch resolution against the current directory.
#[test]
fn given_relative_credentials_path_when_loaded_then_resolved_against_config_dir() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("sdk_config.toml");
    fs::write(&config_path, "credentials_path = \"creds.toml\"\n").unwrap();

    let config = SdkConfig::load(&config_path).unwrap();

    assert_eq!(config.credentials_path, Some(dir.path().join("creds.toml")));
}

#[test]
fn given_invalid_file_when_loaded_then_parse_error_names_path() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("sdk_config.toml");
    fs::write(&config_path, "timeout_secs = [").unwrap();

    let err = SdkConfig::load(&config_path).unwrap_err();

    match err {
        ConfigError::ParseError { path, .. } => assert_eq!(path, config_path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn given_inline_credentials_when_debug_formatted_then_only_account_names_shown() {
    let config = SdkConfig::from_toml_str("[credentials.acct1]\naccess_token = \"hidden-value\"")
        .unwrap();

    let debug = format!("{config:?}");

    assert!(debug.contains("acct1"));
    assert!(!debug.contains("hidden-value"));
}

#[test]
fn given_with_access_token_when_applied_then_replaces_credential_sources() {
    let config = SdkConfig {
        credentials_path: Some("creds.toml".into()),
        default_account: Some("acct1".to_string()),
        ..SdkConfig::default()
    }
    .with_access_token("abc");

    assert!(config.credentials_path.is_none());
    assert!(config.default_account.is_none());
    assert_eq!(
        config
            .credentials
            .as_ref()
            .and_then(|t| t.get("access_token"))
            .and_then(|v| v.as_str()),
        Some("abc")
    );
}
