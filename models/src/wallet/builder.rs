use crate::error::model_error::ModelError;
use crate::wallet::Wallet;

/// Longest wallet name the API accepts.
pub const MAX_WALLET_NAME_LEN: usize = 25;

/// Builder for wallets sent to `POST /wallets`.
///
/// Validates the name locally so a malformed wallet never costs a request.
#[derive(Debug, Default)]
pub struct WalletBuilder {
    name: Option<String>,
    addresses: Vec<String>,
}

impl WalletBuilder {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.addresses.push(address.into());
        self
    }

    pub fn with_addresses<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.addresses.extend(addresses.into_iter().map(Into::into));
        self
    }

    /// Build the Wallet with validation.
    #[track_caller]
    pub fn build(self) -> Result<Wallet, ModelError> {
        let name = self
            .name
            .ok_or_else(|| ModelError::validation("Wallet name is required"))?;

        if name.trim().is_empty() {
            return Err(ModelError::validation("Wallet name cannot be empty"));
        }

        if name.chars().count() > MAX_WALLET_NAME_LEN {
            return Err(ModelError::validation(format!(
                "Wallet name cannot exceed {MAX_WALLET_NAME_LEN} characters: {name}"
            )));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ModelError::validation(format!(
                "Wallet name must be alphanumeric: {name}"
            )));
        }

        if self.addresses.iter().any(|a| a.trim().is_empty()) {
            return Err(ModelError::validation("Wallet addresses cannot be empty"));
        }

        Ok(Wallet {
            token: None,
            name: Some(name),
            addresses: if self.addresses.is_empty() {
                None
            } else {
                Some(self.addresses)
            },
        })
    }
}
