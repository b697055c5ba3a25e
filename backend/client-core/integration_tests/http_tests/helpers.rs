//! Shared setup for tests that run against a local mock API.

use blockcypher_client::{BlockCypherClient, SdkConfig};

use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-12345";

/// Config pointing at `server` with an inline access token.
pub fn config_for(server: &MockServer) -> SdkConfig {
    SdkConfig::default()
        .with_endpoint(server.uri())
        .with_access_token(TEST_TOKEN)
}

/// Client using the real `reqwest` transport against `server`.
pub fn client_for(server: &MockServer) -> BlockCypherClient {
    BlockCypherClient::new(config_for(server)).expect("Failed to build client")
}
