//! Recording transport for tests that must observe (or rule out) I/O.

use crate::config::SdkConfig;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::BlockCypherClient;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

pub const TEST_TOKEN: &str = "test-token-12345";

/// Records every request and answers with a fixed response.
pub struct SpyTransport {
    requests: Mutex<Vec<HttpRequest>>,
    status: u16,
    body: Vec<u8>,
}

impl SpyTransport {
    pub fn responding(status: u16, body: &str) -> Arc<Self> {
        Self::responding_bytes(status, body.as_bytes())
    }

    pub fn responding_bytes(status: u16, body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            status,
            body: body.to_vec(),
        })
    }

    pub fn ok(body: &str) -> Arc<Self> {
        Self::responding(200, body)
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(HttpResponse::new(self.status, self.body.clone()))
    }
}

pub fn token_config() -> SdkConfig {
    SdkConfig::default().with_access_token(TEST_TOKEN)
}

pub fn client_with(config: SdkConfig, spy: &Arc<SpyTransport>) -> BlockCypherClient {
    BlockCypherClient::with_transport(config, spy.clone()).expect("valid test config")
}
