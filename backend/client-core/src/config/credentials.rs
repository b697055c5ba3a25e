use crate::error::config::ConfigError;
use crate::error::credential::CredentialError;

use common::{ErrorLocation, RedactedToken};

use std::path::{Path, PathBuf};

use log::debug;

const ACCESS_TOKEN_KEY: &str = "access_token";
const CREDENTIALS_SECTION: &str = "credentials";

/// Credential records as written in configuration.
///
/// Two layouts are accepted:
///
/// ```toml
/// access_token = "..."          # one record
/// ```
///
/// ```toml
/// [acct1]                       # named accounts
/// access_token = "..."
/// ```
#[derive(Clone, Default)]
pub struct CredentialRecords {
    table: toml::Table,
}

impl CredentialRecords {
    pub fn from_table(table: toml::Table) -> Self {
        Self { table }
    }

    /// Read records from a standalone TOML file. A top-level `[credentials]`
    /// section is unwrapped if present.
    #[track_caller]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::caller(),
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut table: toml::Table =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::caller(),
                path: PathBuf::from(path),
                reason: e.to_string(),
            })?;

        if let Some(toml::Value::Table(section)) = table.remove(CREDENTIALS_SECTION) {
            table = section;
        }

        debug!("Credential records loaded from {}", path.display());
        Ok(Self { table })
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Resolve the access token for `account`, or for the first usable
    /// record (in key order) when no account is named.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Missing`] when the record is absent, is not a
    /// table, or has no non-empty `access_token` string.
    #[track_caller]
    pub fn access_token(&self, account: Option<&str>) -> Result<RedactedToken, CredentialError> {
        let token = match account {
            Some(name) => {
                let record = self.table.get(name).ok_or_else(|| {
                    CredentialError::missing(format!("No credential record for account '{name}'"))
                })?;
                token_of_record(record)
            }
            None if self.table.contains_key(ACCESS_TOKEN_KEY) => {
                self.table.get(ACCESS_TOKEN_KEY).and_then(|v| v.as_str())
            }
            None => self.table.values().find_map(token_of_record),
        };

        match token {
            Some(token) if !token.trim().is_empty() => Ok(RedactedToken::new(token)),
            _ => Err(CredentialError::missing("Empty or invalid credentials passed")),
        }
    }
}

fn token_of_record(record: &toml::Value) -> Option<&str> {
    record
        .as_table()
        .and_then(|fields| fields.get(ACCESS_TOKEN_KEY))
        .and_then(|token| token.as_str())
}
