use super::ADDRS_SEGMENT;
use crate::client::BlockCypherClient;
use crate::context::ApiContext;
use crate::error::ClientError;
use crate::rest_call::RestRequest;
use crate::validation::{Params, filter_query, join_identifiers, validate_identifier};

use models::{Address, AddressBalance, AddressKeyChain, FullAddress, ResourceModel};

/// Query keys honoured by address lookups.
pub const ADDRESS_PARAMS: &[&str] = &["unspentOnly", "before"];

/// Address endpoints: `<base>/addrs`.
pub struct AddressApi<'a> {
    client: &'a BlockCypherClient,
}

impl<'a> AddressApi<'a> {
    pub(crate) fn new(client: &'a BlockCypherClient) -> Self {
        Self { client }
    }

    /// Generate a new address and its key pair on the server.
    pub async fn create(&self, context: Option<&ApiContext>) -> Result<AddressKeyChain, ClientError> {
        let base = self.client.base_chain_path(context);
        let request = RestRequest::post(format!("{base}/{ADDRS_SEGMENT}"), None);
        let body = self.client.call(request, context).await?;
        Ok(AddressKeyChain::from_slice(&body)?)
    }

    /// Fetch one address. Only `unspentOnly` and `before` are forwarded.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Argument`] for an empty identifier, before any I/O.
    pub async fn get(
        &self,
        identifier: &str,
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<Address, ClientError> {
        validate_identifier("address", identifier)?;
        let path = address_path(&self.client.base_chain_path(context), identifier, params);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(Address::from_slice(&body)?)
    }

    /// Fetch several addresses in one request; results keep server order.
    pub async fn get_multiple<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<Vec<Address>, ClientError> {
        let joined = join_identifiers("addresses", identifiers)?;
        let path = address_path(&self.client.base_chain_path(context), &joined, params);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(Address::list_from_slice(&body)?)
    }

    pub async fn get_full_address(
        &self,
        identifier: &str,
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<FullAddress, ClientError> {
        self.client
            .full_addresses()
            .get(identifier, params, context)
            .await
    }

    pub async fn get_only_balance(
        &self,
        identifier: &str,
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<AddressBalance, ClientError> {
        self.client.balances().get(identifier, params, context).await
    }
}

pub(crate) fn address_path(base: &str, identifier: &str, params: &Params) -> String {
    format!(
        "{base}/{ADDRS_SEGMENT}/{identifier}?{}",
        filter_query(params, ADDRESS_PARAMS)
    )
}
