//! Address resource models.

use crate::resource::{ResourceModel, push_item, remove_item};
use crate::transaction::Transaction;
use crate::txref::Txref;
use crate::wallet::Wallet;

use serde::{Deserialize, Serialize};

/// Balance and transaction references for one address, as returned by
/// `GET /addrs/{address}`.
///
/// Amounts are in satoshis. `unconfirmed_balance` may be negative when
/// unconfirmed transactions only spend from the address.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Present when the request addressed a wallet name instead of an address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_received: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sent: Option<i64>,
    /// Confirmed balance (transactions with at least one confirmation).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unconfirmed_balance: Option<i64>,
    /// Confirmed plus unconfirmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_tx: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unconfirmed_n_tx: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_n_tx: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txrefs: Option<Vec<Txref>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unconfirmed_txrefs: Option<Vec<Txref>>,
    #[serde(rename = "hasMore", default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    /// Base URL for transactions; append a transaction hash to get its URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_url: Option<String>,
}

impl ResourceModel for Address {}

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }

    /// Confirmed transaction references, empty when unset.
    pub fn txrefs(&self) -> &[Txref] {
        self.txrefs.as_deref().unwrap_or_default()
    }

    pub fn add_txref(&mut self, txref: Txref) -> &mut Self {
        push_item(&mut self.txrefs, txref);
        self
    }

    /// Removes every txref equal to `txref`.
    pub fn remove_txref(&mut self, txref: &Txref) -> &mut Self {
        remove_item(&mut self.txrefs, txref);
        self
    }

    pub fn unconfirmed_txrefs(&self) -> &[Txref] {
        self.unconfirmed_txrefs.as_deref().unwrap_or_default()
    }

    pub fn add_unconfirmed_txref(&mut self, txref: Txref) -> &mut Self {
        push_item(&mut self.unconfirmed_txrefs, txref);
        self
    }

    pub fn remove_unconfirmed_txref(&mut self, txref: &Txref) -> &mut Self {
        remove_item(&mut self.unconfirmed_txrefs, txref);
        self
    }
}

/// Balance-only view of an address (`GET /addrs/{address}/balance`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddressBalance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_received: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sent: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unconfirmed_balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_tx: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unconfirmed_n_tx: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_n_tx: Option<u64>,
}

impl ResourceModel for AddressBalance {}

/// Address with full transaction details (`GET /addrs/{address}/full`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FullAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<Wallet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_received: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sent: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unconfirmed_balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_tx: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unconfirmed_n_tx: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_n_tx: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_url: Option<String>,
    #[serde(rename = "hasMore", default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txs: Option<Vec<Transaction>>,
}

impl ResourceModel for FullAddress {}

impl FullAddress {
    pub fn txs(&self) -> &[Transaction] {
        self.txs.as_deref().unwrap_or_default()
    }

    pub fn add_tx(&mut self, tx: Transaction) -> &mut Self {
        push_item(&mut self.txs, tx);
        self
    }

    pub fn remove_tx(&mut self, tx: &Transaction) -> &mut Self {
        remove_item(&mut self.txs, tx);
        self
    }
}

/// Result of `POST /addrs`: a freshly generated address and its keys.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddressKeyChain {
    #[serde(rename = "private", default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(rename = "public", default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wif: Option<String>,
}

impl ResourceModel for AddressKeyChain {}

// Private key material stays out of logs.
impl std::fmt::Debug for AddressKeyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressKeyChain")
            .field("public_key", &self.public_key)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
