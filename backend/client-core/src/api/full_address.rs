use super::ADDRS_SEGMENT;
use crate::client::BlockCypherClient;
use crate::context::ApiContext;
use crate::error::ClientError;
use crate::rest_call::RestRequest;
use crate::validation::{Params, filter_query, join_identifiers, validate_identifier};

use models::{FullAddress, ResourceModel};

pub const FULL_ADDRESS_PARAMS: &[&str] = &[
    "before",
    "after",
    "limit",
    "txlimit",
    "confidence",
    "includeHex",
    "includeConfidence",
];

/// Address lookups that embed full transactions: `<base>/addrs/<id>/full`.
pub struct FullAddressApi<'a> {
    client: &'a BlockCypherClient,
}

impl<'a> FullAddressApi<'a> {
    pub(crate) fn new(client: &'a BlockCypherClient) -> Self {
        Self { client }
    }

    pub async fn get(
        &self,
        identifier: &str,
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<FullAddress, ClientError> {
        validate_identifier("address", identifier)?;
        let path = full_address_path(&self.client.base_chain_path(context), identifier, params);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(FullAddress::from_slice(&body)?)
    }

    pub async fn get_multiple<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<Vec<FullAddress>, ClientError> {
        let joined = join_identifiers("addresses", identifiers)?;
        let path = full_address_path(&self.client.base_chain_path(context), &joined, params);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(FullAddress::list_from_slice(&body)?)
    }
}

pub(crate) fn full_address_path(base: &str, identifier: &str, params: &Params) -> String {
    format!(
        "{base}/{ADDRS_SEGMENT}/{identifier}/full?{}",
        filter_query(params, FULL_ADDRESS_PARAMS)
    )
}
