pub mod builder;

use crate::resource::{ResourceModel, push_item, remove_item};

use serde::{Deserialize, Serialize};

/// Named list of addresses stored server-side under an access token.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
}

impl ResourceModel for Wallet {}

impl Wallet {
    pub fn addresses(&self) -> &[String] {
        self.addresses.as_deref().unwrap_or_default()
    }

    pub fn add_address(&mut self, address: impl Into<String>) -> &mut Self {
        push_item(&mut self.addresses, address.into());
        self
    }

    pub fn remove_address(&mut self, address: &str) -> &mut Self {
        remove_item(&mut self.addresses, &address.to_string());
        self
    }
}

/// Result of `POST /wallets/{name}/addresses/generate`: the updated wallet
/// plus the keys of the address that was added to it.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WalletKeyChain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(rename = "private", default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(rename = "public", default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wif: Option<String>,
}

impl ResourceModel for WalletKeyChain {}

impl std::fmt::Debug for WalletKeyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletKeyChain")
            .field("name", &self.name)
            .field("addresses", &self.addresses)
            .field("public_key", &self.public_key)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
