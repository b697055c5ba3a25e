use crate::client::BlockCypherClient;
use crate::context::ApiContext;
use crate::error::ClientError;
use crate::rest_call::RestRequest;
use crate::validation::{Params, filter_query, join_identifiers, validate_identifier};

use models::{ResourceModel, Transaction};

pub const TRANSACTION_PARAMS: &[&str] = &[
    "instart",
    "outstart",
    "limit",
    "includeHex",
    "includeConfidence",
];

const TXS_SEGMENT: &str = "txs";

/// Transactions by hash: `<base>/txs/<hash>`.
pub struct TransactionApi<'a> {
    client: &'a BlockCypherClient,
}

impl<'a> TransactionApi<'a> {
    pub(crate) fn new(client: &'a BlockCypherClient) -> Self {
        Self { client }
    }

    pub async fn get(
        &self,
        hash: &str,
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<Transaction, ClientError> {
        validate_identifier("transaction", hash)?;
        let path = transaction_path(&self.client.base_chain_path(context), hash, params);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(Transaction::from_slice(&body)?)
    }

    pub async fn get_multiple<S: AsRef<str>>(
        &self,
        hashes: &[S],
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<Vec<Transaction>, ClientError> {
        let joined = join_identifiers("transactions", hashes)?;
        let path = transaction_path(&self.client.base_chain_path(context), &joined, params);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(Transaction::list_from_slice(&body)?)
    }

    /// Transactions waiting in the mempool.
    pub async fn get_unconfirmed(
        &self,
        context: Option<&ApiContext>,
    ) -> Result<Vec<Transaction>, ClientError> {
        let path = format!("{}/{TXS_SEGMENT}", self.client.base_chain_path(context));
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(Transaction::list_from_slice(&body)?)
    }
}

pub(crate) fn transaction_path(base: &str, identifier: &str, params: &Params) -> String {
    format!(
        "{base}/{TXS_SEGMENT}/{identifier}?{}",
        filter_query(params, TRANSACTION_PARAMS)
    )
}
