use crate::client::BlockCypherClient;
use crate::context::ApiContext;
use crate::error::ClientError;
use crate::rest_call::RestRequest;
use crate::validation::{Params, filter_query, join_identifiers, validate_identifier};

use models::{Block, ResourceModel};

pub const BLOCK_PARAMS: &[&str] = &["txstart", "limit"];

/// Blocks by hash or height: `<base>/blocks/<id>`.
pub struct BlockApi<'a> {
    client: &'a BlockCypherClient,
}

impl<'a> BlockApi<'a> {
    pub(crate) fn new(client: &'a BlockCypherClient) -> Self {
        Self { client }
    }

    pub async fn get(
        &self,
        hash_or_height: &str,
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<Block, ClientError> {
        validate_identifier("block", hash_or_height)?;
        let path = block_path(&self.client.base_chain_path(context), hash_or_height, params);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(Block::from_slice(&body)?)
    }

    pub async fn get_multiple<S: AsRef<str>>(
        &self,
        hashes_or_heights: &[S],
        params: &Params,
        context: Option<&ApiContext>,
    ) -> Result<Vec<Block>, ClientError> {
        let joined = join_identifiers("blocks", hashes_or_heights)?;
        let path = block_path(&self.client.base_chain_path(context), &joined, params);
        let body = self.client.call(RestRequest::get(path), context).await?;
        Ok(Block::list_from_slice(&body)?)
    }
}

pub(crate) fn block_path(base: &str, identifier: &str, params: &Params) -> String {
    format!(
        "{base}/blocks/{identifier}?{}",
        filter_query(params, BLOCK_PARAMS)
    )
}
