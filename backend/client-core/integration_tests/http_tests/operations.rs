use crate::http_tests::helpers::{TEST_TOKEN, client_for, config_for};

use blockcypher_client::error::{CredentialError, TransportError};
use blockcypher_client::models::ModelError;
use blockcypher_client::{ApiContext, BlockCypherClient, ClientError, Params, SdkConfig};

use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ADDRESS: &str = "CEztKBAYNoUEEaPYbkyFeXC5v8Jz9RoZH9";

/// **VALUE**: Exercises one lookup end to end: path, allow-listed query, token, User-Agent, hydration.
///
/// **WHY THIS MATTERS**: This is the main thing the SDK is for.
///
/// **BUG THIS CATCHES**: Would catch any layer mangling the URL or dropping the token.
#[tokio::test]
async fn given_mock_api_when_address_get_then_returns_hydrated_address() {
    // GIVEN: An API that knows one address
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/btc/main/addrs/{ADDRESS}")))
        .and(query_param("token", TEST_TOKEN))
        .and(query_param("unspentOnly", "true"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "address": ADDRESS,
            "final_balance": 620000,
            "txrefs": [
                {"tx_hash": "a1", "value": 100000, "tx_output_n": 0},
                {"tx_hash": "a2", "value": 520000, "tx_output_n": 1}
            ],
            "unconfirmed_txrefs": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params: Params = [("unspentOnly", "true"), ("ignored", "x")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    // WHEN: Fetching the address
    let address = client.addresses().get(ADDRESS, &params, None).await.unwrap();

    // THEN: The model reflects the response, empty and absent lists stay distinct
    assert_eq!(address.final_balance, Some(620000));
    assert_eq!(address.txrefs().len(), 2);
    assert_eq!(address.unconfirmed_txrefs, Some(vec![]));
    assert_eq!(address.has_more, None);
}

#[tokio::test]
async fn given_unknown_address_when_get_then_status_error_passes_body_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Address not found."})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .addresses()
        .get("nope", &Params::new(), None)
        .await
        .unwrap_err();

    match err {
        ClientError::Transport(TransportError::Status {
            status_code, body, ..
        }) => {
            assert_eq!(status_code.as_u16(), 404);
            assert!(body.contains("Address not found."));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a 2xx body with bytes that are not UTF-8 is a model error.
///
/// **WHY THIS MATTERS**: Decoding lossily would hand back an address containing
/// U+FFFD as if the server had sent it.
///
/// **BUG THIS CATCHES**: Would catch the transport decoding the body as text before
/// the models see it.
#[tokio::test]
async fn given_invalid_utf8_body_when_address_get_then_model_error() {
    // GIVEN: A server answering 200 with a broken byte inside a JSON string
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/btc/main/addrs/abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"{\"address\":\"a\xffb\"}".to_vec(), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching the address
    let result = client_for(&server)
        .addresses()
        .get("abc", &Params::new(), None)
        .await;

    // THEN: Hydration fails instead of replacing the byte
    assert!(
        matches!(result, Err(ClientError::Model(ModelError::Json { .. }))),
        "expected JSON model error, got {result:?}"
    );
}

/// **VALUE**: Verifies writes carry the JSON content type and an idempotency id.
///
/// **BUG THIS CATCHES**: Would catch the server receiving `text/plain`, which the
/// API rejects for wallet creation.
#[tokio::test]
async fn given_wallet_when_created_then_server_receives_json_with_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/bcy/test/wallets"))
        .and(header("Content-Type", "application/json"))
        .and(header("BlockCypher-Request-Id", "wallet-create-1"))
        .and(body_json(json!({"name": "alice", "addresses": ["CEzt"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": TEST_TOKEN,
            "name": "alice",
            "addresses": ["CEzt"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let context = ApiContext::new()
        .for_chain("bcy", "test")
        .with_request_id("wallet-create-1");
    let wallet = models::WalletBuilder::default()
        .with_name("alice")
        .with_address("CEzt")
        .build()
        .unwrap();

    let created = client.wallets().create(&wallet, Some(&context)).await.unwrap();

    assert_eq!(created.token.as_deref(), Some(TEST_TOKEN));
}

#[tokio::test]
async fn given_wallet_when_deleted_then_empty_204_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/btc/main/wallets/alice"))
        .and(query_param("token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .wallets()
        .delete("alice", None)
        .await
        .unwrap();
}

/// **VALUE**: Verifies a client without any credential never reaches the server.
///
/// **BUG THIS CATCHES**: Would catch requests leaving with an empty `token=`.
#[tokio::test]
async fn given_no_credential_when_operation_called_then_server_sees_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = SdkConfig::default().with_endpoint(server.uri());
    let client = BlockCypherClient::new(config).unwrap();

    let err = client.chain().get(None).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Credential(CredentialError::Missing { .. })
    ));
}

#[tokio::test]
async fn given_mock_chain_when_get_then_returns_blockchain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/btc/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "BTC.main",
            "height": 360060,
            "high_fee_per_kb": 46086,
            "last_fork_height": 359865
        })))
        .mount(&server)
        .await;

    let chain = client_for(&server).chain().get(None).await.unwrap();

    assert_eq!(chain.high_fee_per_kb, Some(46086));
    assert_eq!(chain.last_fork_height, Some(359865));
}

#[tokio::test]
async fn given_context_header_when_called_then_server_sees_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("User-Agent", "custom-agent/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hash": "t1"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.http.user_agent = Some("configured/1".to_string());
    let client = BlockCypherClient::new(config).unwrap();
    let context = ApiContext::new().with_header("User-Agent", "custom-agent/9");

    let tx = client
        .transactions()
        .get("t1", &Params::new(), Some(&context))
        .await
        .unwrap();

    assert_eq!(tx.hash.as_deref(), Some("t1"));
}
