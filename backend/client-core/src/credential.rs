//! Credentials and the process-wide default credential.

use crate::config::{CredentialRecords, SdkConfig};
use crate::error::ClientError;

use common::RedactedToken;

use std::fmt;
use std::path::PathBuf;

use log::info;
use once_cell::sync::OnceCell;

/// Something that can authenticate a request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Access token appended to the request URL as `token=<t>`.
    Token(RedactedToken),
    /// Client certificate pair. Accepted by the type system but no handler
    /// in this crate can apply it.
    Certificate { cert_path: PathBuf, key_path: PathBuf },
}

impl Credential {
    pub fn token(token: impl Into<String>) -> Self {
        Credential::Token(RedactedToken::new(token))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Credential::Token(_) => "token",
            Credential::Certificate { .. } => "certificate",
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Token(token) => f.debug_tuple("Token").field(token).finish(),
            Credential::Certificate {
                cert_path,
                key_path,
            } => f
                .debug_struct("Certificate")
                .field("cert_path", cert_path)
                .field("key_path", key_path)
                .finish(),
        }
    }
}

/// Resolves the default credential from configuration once and keeps it.
///
/// Failed lookups are not memoized; the next call retries.
pub struct CredentialManager {
    records: Option<CredentialRecords>,
    credentials_path: Option<PathBuf>,
    default_account: Option<String>,
    resolved: OnceCell<Credential>,
}

impl CredentialManager {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            records: config.credentials.clone().map(CredentialRecords::from_table),
            credentials_path: config.credentials_path.clone(),
            default_account: config.default_account.clone(),
            resolved: OnceCell::new(),
        }
    }

    /// Manager that already holds `credential`; configuration is ignored.
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            records: None,
            credentials_path: None,
            default_account: None,
            resolved: OnceCell::with_value(credential),
        }
    }

    /// The credential configured for the default (or first) account.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Config`] if the credentials file cannot be read or parsed
    /// - [`ClientError::Credential`] if no usable access token is configured
    pub fn default_credential(&self) -> Result<&Credential, ClientError> {
        self.resolved.get_or_try_init(|| {
            let records = match &self.credentials_path {
                Some(path) => CredentialRecords::load(path)?,
                None => self.records.clone().unwrap_or_default(),
            };

            let token = records.access_token(self.default_account.as_deref())?;
            info!(
                "Default credential resolved (account: {}, token length: {})",
                self.default_account.as_deref().unwrap_or("<first>"),
                token.len()
            );
            Ok(Credential::Token(token))
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}
