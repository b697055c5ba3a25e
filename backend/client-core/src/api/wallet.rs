use crate::client::BlockCypherClient;
use crate::context::ApiContext;
use crate::error::{ArgumentError, ClientError};
use crate::rest_call::RestRequest;
use crate::validation::{Params, filter_query, join_identifiers, validate_identifier};

use models::{ResourceModel, Wallet, WalletKeyChain};

use serde_json::json;

pub const WALLET_ADDRESS_PARAMS: &[&str] = &["used", "zerobalance"];

const WALLETS_SEGMENT: &str = "wallets";

/// Named wallets owned by the access token: `<base>/wallets/<name>`.
pub struct WalletApi<'a> {
    client: &'a BlockCypherClient,
}

impl<'a> WalletApi<'a> {
    pub(crate) fn new(client: &'a BlockCypherClient) -> Self {
        Self { client }
    }

    /// Register `wallet` on the server. The wallet must carry a name.
    pub async fn create(
        &self,
        wallet: &Wallet,
        context: Option<&ApiContext>,
    ) -> Result<Wallet, ClientError> {
        let name = wallet
            .name
            .as_deref()
            .ok_or_else(|| ArgumentError::empty("wallet name"))?;
        validate_identifier("wallet name", name)?;

        let path = format!("{}/{WALLETS_SEGMENT}", self.client.base_chain_path(context));
        let request = RestRequest::post(path, Some(wallet.to_json()?));
        let body = self.client.call(request, context).await?;
        Ok(Wallet::from_slice(&body)?)
    }

    pub async fn get(&self, name: &str, context: Option<&ApiContext>) -> Result<Wallet, ClientError> {
        validate_identifier("wallet name", name)?;
        let path = wallet_path(&self.client.base_chain_path(context), name);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(Wallet::from_slice(&body)?)
    }

    /// Append addresses to a wallet; returns the wallet as stored afterwards.
    pub async fn add_addresses<S: AsRef<str>>(
        &self,
        name: &str,
        addresses: &[S],
        context: Option<&ApiContext>,
    ) -> Result<Wallet, ClientError> {
        validate_identifier("wallet name", name)?;
        join_identifiers("addresses", addresses)?;

        let addresses: Vec<&str> = addresses.iter().map(AsRef::as_ref).collect();
        let payload = json!({ "addresses": addresses }).to_string();

        let path = format!(
            "{}/addresses",
            wallet_path(&self.client.base_chain_path(context), name)
        );
        let body = self
            .client
            .call(RestRequest::post(path, Some(payload)), context)
            .await?;
        Ok(Wallet::from_slice(&body)?)
    }

    /// Addresses in a wallet, optionally filtered by `used` / `zerobalance`.
    pub async fn get_addresses(
        &self,
        name: &str,
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<Wallet, ClientError> {
        validate_identifier("wallet name", name)?;
        let path = format!(
            "{}/addresses?{}",
            wallet_path(&self.client.base_chain_path(context), name),
            filter_query(params, WALLET_ADDRESS_PARAMS)
        );
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(Wallet::from_slice(&body)?)
    }

    pub async fn remove_addresses<S: AsRef<str>>(
        &self,
        name: &str,
        addresses: &[S],
        context: Option<&ApiContext>,
    ) -> Result<(), ClientError> {
        validate_identifier("wallet name", name)?;
        let joined = join_identifiers("addresses", addresses)?;
        let path = format!(
            "{}/addresses?address={joined}",
            wallet_path(&self.client.base_chain_path(context), name)
        );
        self.client.call(RestRequest::delete(path), context).await?;
        Ok(())
    }

    /// Generate a fresh address inside the wallet and return its keys.
    pub async fn generate_address(
        &self,
        name: &str,
        context: Option<&ApiContext>,
    ) -> Result<WalletKeyChain, ClientError> {
        validate_identifier("wallet name", name)?;
        let path = format!(
            "{}/addresses/generate",
            wallet_path(&self.client.base_chain_path(context), name)
        );
        let body = self
            .client
            .call(RestRequest::post(path, None), context)
            .await?;
        Ok(WalletKeyChain::from_slice(&body)?)
    }

    pub async fn delete(&self, name: &str, context: Option<&ApiContext>) -> Result<(), ClientError> {
        validate_identifier("wallet name", name)?;
        let path = wallet_path(&self.client.base_chain_path(context), name);
        self.client.call(RestRequest::delete(path), context).await?;
        Ok(())
    }
}

pub(crate) fn wallet_path(base: &str, name: &str) -> String {
    format!("{base}/{WALLETS_SEGMENT}/{name}")
}
