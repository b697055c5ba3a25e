pub mod credentials;

pub use credentials::CredentialRecords;

use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

const CONFIG_DIR_NAME: &str = "blockcypher";
const CONFIG_FILE_NAME: &str = "sdk_config.toml";

pub const DEFAULT_ENDPOINT: &str = "https://api.blockcypher.com";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_COIN: &str = "btc";
pub const DEFAULT_CHAIN: &str = "main";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================
// CONFIG STRUCTS
// ============================================

/// Where requests go: `<endpoint>/<version>/<coin>/<chain>`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_version")]
    pub version: String,
    #[serde(default = "default_coin")]
    pub coin: String,
    #[serde(default = "default_chain")]
    pub chain: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            version: default_api_version(),
            coin: default_coin(),
            chain: default_chain(),
        }
    }
}

impl ApiConfig {
    /// Path prefix shared by every resource, e.g. `/v1/btc/main`.
    ///
    /// `coin` and `chain` override the configured values for one call.
    pub fn base_chain_path(&self, coin: Option<&str>, chain: Option<&str>) -> String {
        format!(
            "/{}/{}/{}",
            self.version,
            coin.unwrap_or(&self.coin),
            chain.unwrap_or(&self.chain)
        )
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Replaces the SDK's own `User-Agent` value.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// SDK configuration, built once and shared by every call.
///
/// ```toml
/// [api]
/// coin = "btc"
/// chain = "test3"
///
/// [http]
/// timeout_secs = 10
///
/// [credentials.acct1]
/// access_token = "..."
/// ```
#[derive(Clone, Default, Deserialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub http: HttpConfig,

    /// External TOML file holding the credential records; takes precedence
    /// over the inline `[credentials]` table.
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,

    /// Account to pick from the credential records.
    #[serde(default)]
    pub default_account: Option<String>,

    #[serde(default)]
    pub credentials: Option<toml::Table>,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}
fn default_coin() -> String {
    DEFAULT_COIN.to_string()
}
fn default_chain() -> String {
    DEFAULT_CHAIN.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

// ============================================
// IMPLEMENTATION
// ============================================

impl SdkConfig {
    /// Default location: `{config_dir}/blockcypher/sdk_config.toml`.
    #[track_caller]
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| ConfigError::DirectoryNotFound {
                location: ErrorLocation::caller(),
            })
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read, parsed or validated.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;

        if !path.exists() {
            info!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Load config from an explicit TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - The file cannot be read (including when it does not exist)
    /// - The TOML is malformed
    /// - Validation fails
    #[track_caller]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::caller(),
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config = Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::ParseError {
                location, reason, ..
            } => ConfigError::ParseError {
                location,
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;

        // Relative credential files are resolved next to the config file.
        if let Some(credentials_path) = config.credentials_path.as_mut()
            && credentials_path.is_relative()
            && let Some(parent) = path.parent()
        {
            *credentials_path = parent.join(&*credentials_path);
        }

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config from TOML text.
    #[track_caller]
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SdkConfig = toml::from_str(contents).map_err(|e| ConfigError::ParseError {
            location: ErrorLocation::caller(),
            path: PathBuf::new(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Config with a single inline access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        let mut table = toml::Table::new();
        table.insert("access_token".to_string(), toml::Value::String(token.into()));
        self.credentials = Some(table);
        self.credentials_path = None;
        self.default_account = None;
        self
    }

    pub fn with_chain(mut self, coin: impl Into<String>, chain: impl Into<String>) -> Self {
        self.api.coin = coin.into();
        self.api.chain = chain.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api.endpoint = endpoint.into();
        self
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.api.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::validation(format!(
                "Invalid endpoint URL format: {endpoint}"
            )));
        }

        for (name, value) in [
            ("api.version", &self.api.version),
            ("api.coin", &self.api.coin),
            ("api.chain", &self.api.chain),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::validation(format!("{name} cannot be empty")));
            }
            if value.contains('/') {
                return Err(ConfigError::validation(format!(
                    "{name} cannot contain '/': {value}"
                )));
            }
        }

        if self.http.timeout_secs == 0 {
            return Err(ConfigError::validation("http.timeout_secs must be greater than 0"));
        }

        if let Some(agent) = &self.http.user_agent
            && agent.trim().is_empty()
        {
            return Err(ConfigError::validation("http.user_agent cannot be empty string"));
        }

        Ok(())
    }
}

// Credential tables hold raw tokens; only account names are printed.
impl fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accounts: Option<Vec<&String>> = self.credentials.as_ref().map(|t| t.keys().collect());
        f.debug_struct("SdkConfig")
            .field("api", &self.api)
            .field("http", &self.http)
            .field("credentials_path", &self.credentials_path)
            .field("default_account", &self.default_account)
            .field("credentials", &accounts)
            .finish()
    }
}
