use super::ADDRS_SEGMENT;
use crate::client::BlockCypherClient;
use crate::context::ApiContext;
use crate::error::ClientError;
use crate::rest_call::RestRequest;
use crate::validation::{Params, filter_query, join_identifiers, validate_identifier};

use models::{AddressBalance, ResourceModel};

pub const BALANCE_PARAMS: &[&str] = &["omitWalletAddresses"];

/// Balance-only address lookups: `<base>/addrs/<id>/balance`.
pub struct AddressBalanceApi<'a> {
    client: &'a BlockCypherClient,
}

impl<'a> AddressBalanceApi<'a> {
    pub(crate) fn new(client: &'a BlockCypherClient) -> Self {
        Self { client }
    }

    pub async fn get(
        &self,
        identifier: &str,
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<AddressBalance, ClientError> {
        validate_identifier("address", identifier)?;
        let path = balance_path(&self.client.base_chain_path(context), identifier, params);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(AddressBalance::from_slice(&body)?)
    }

    pub async fn get_multiple<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<Vec<AddressBalance>, ClientError> {
        let joined = join_identifiers("addresses", identifiers)?;
        let path = balance_path(&self.client.base_chain_path(context), &joined, params);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(AddressBalance::list_from_slice(&body)?)
    }
}

pub(crate) fn balance_path(base: &str, identifier: &str, params: &Params) -> String {
    format!(
        "{base}/{ADDRS_SEGMENT}/{identifier}/balance?{}",
        filter_query(params, BALANCE_PARAMS)
    )
}
