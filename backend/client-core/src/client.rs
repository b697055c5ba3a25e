use crate::api::{
    AddressApi, AddressBalanceApi, BlockApi, BlockchainApi, FullAddressApi, TransactionApi,
    WalletApi,
};
use crate::config::SdkConfig;
use crate::context::ApiContext;
use crate::credential::CredentialManager;
use crate::error::ClientError;
use crate::handler::{RestHandler, TokenRestHandler};
use crate::http::{ReqwestTransport, Transport};
use crate::rest_call::{self, RestRequest};

use std::sync::Arc;

use log::info;

/// Entry point to the API. Cheap to clone; clones share the transport and
/// the memoized credential.
#[derive(Clone)]
pub struct BlockCypherClient {
    config: Arc<SdkConfig>,
    transport: Arc<dyn Transport>,
    handler: Arc<dyn RestHandler>,
}

impl BlockCypherClient {
    /// Client with the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if `config` fails validation, or
    /// [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: SdkConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(&config.http)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Client that sends every request through `transport`.
    pub fn with_transport(
        config: SdkConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ClientError> {
        config.validate()?;

        let credentials = Arc::new(CredentialManager::new(&config));
        let handler = TokenRestHandler::new(
            &config.api.endpoint,
            config.http.user_agent.as_deref(),
            credentials,
        );

        info!(
            "BlockCypher client ready for {}{}",
            handler.endpoint(),
            config.api.base_chain_path(None, None)
        );

        Ok(Self {
            config: Arc::new(config),
            transport,
            handler: Arc::new(handler),
        })
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn addresses(&self) -> AddressApi<'_> {
        AddressApi::new(self)
    }

    pub fn full_addresses(&self) -> FullAddressApi<'_> {
        FullAddressApi::new(self)
    }

    pub fn balances(&self) -> AddressBalanceApi<'_> {
        AddressBalanceApi::new(self)
    }

    pub fn chain(&self) -> BlockchainApi<'_> {
        BlockchainApi::new(self)
    }

    pub fn blocks(&self) -> BlockApi<'_> {
        BlockApi::new(self)
    }

    pub fn transactions(&self) -> TransactionApi<'_> {
        TransactionApi::new(self)
    }

    pub fn wallets(&self) -> WalletApi<'_> {
        WalletApi::new(self)
    }

    /// `/<version>/<coin>/<chain>`, honouring a context's chain override.
    pub fn base_chain_path(&self, context: Option<&ApiContext>) -> String {
        self.config.api.base_chain_path(
            context.and_then(ApiContext::coin),
            context.and_then(ApiContext::chain),
        )
    }

    pub(crate) async fn call(
        &self,
        request: RestRequest,
        context: Option<&ApiContext>,
    ) -> Result<Vec<u8>, ClientError> {
        let transport = self.transport.as_ref();
        let handler = self.handler.as_ref();

        match context {
            Some(context) => rest_call::execute(transport, handler, request, context).await,
            None => rest_call::execute(transport, handler, request, &ApiContext::new()).await,
        }
    }
}
