//! Per-call context: credential override, extra headers, chain override.

use crate::credential::Credential;

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use uuid::Uuid;

/// Optional per-call settings layered on top of the client configuration.
///
/// A context is cheap to build and may be reused across calls; its request
/// id is generated on first use and then stays fixed.
#[derive(Debug, Clone, Default)]
pub struct ApiContext {
    credential: Option<Credential>,
    request_headers: HashMap<String, String>,
    request_id: OnceCell<String>,
    coin: Option<String>,
    chain: Option<String>,
}

impl ApiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `credential` instead of the configured default.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Add a header to every request made with this context. Applied after
    /// the SDK's own headers, so it replaces any of them with the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request_headers.insert(name.into(), value.into());
        self
    }

    /// Target another coin/chain for calls made with this context.
    pub fn for_chain(mut self, coin: impl Into<String>, chain: impl Into<String>) -> Self {
        self.coin = Some(coin.into());
        self.chain = Some(chain.into());
        self
    }

    pub fn with_request_id(self, request_id: impl Into<String>) -> Self {
        let request_id = OnceCell::with_value(request_id.into());
        Self { request_id, ..self }
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn request_headers(&self) -> &HashMap<String, String> {
        &self.request_headers
    }

    /// Idempotency id sent with writes.
    pub fn request_id(&self) -> &str {
        self.request_id.get_or_init(|| Uuid::new_v4().to_string())
    }

    pub fn coin(&self) -> Option<&str> {
        self.coin.as_deref()
    }

    pub fn chain(&self) -> Option<&str> {
        self.chain.as_deref()
    }
}
