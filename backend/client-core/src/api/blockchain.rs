use crate::client::BlockCypherClient;
use crate::context::ApiContext;
use crate::error::ClientError;
use crate::rest_call::RestRequest;

use models::{Blockchain, ResourceModel};

/// Chain summary: `GET <base>`.
pub struct BlockchainApi<'a> {
    client: &'a BlockCypherClient,
}

impl<'a> BlockchainApi<'a> {
    pub(crate) fn new(client: &'a BlockCypherClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, context: Option<&ApiContext>) -> Result<Blockchain, ClientError> {
        let path = self.client.base_chain_path(context);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(Blockchain::from_slice(&body)?)
    }
}
