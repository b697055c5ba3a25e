use super::super::support::{SpyTransport, TEST_TOKEN, client_with, token_config};
use crate::api::address::address_path;
use crate::config::SdkConfig;
use crate::context::ApiContext;
use crate::credential::Credential;
use crate::error::{ArgumentError, ClientError, CredentialError};
use crate::handler::REQUEST_ID_HEADER;
use crate::http::HttpMethod;
use crate::validation::Params;

use std::path::PathBuf;

const ADDRESS: &str = "1DEP8i3QJCsomS4BSMY2RpU1upv62aGvhD";
const ADDRESS_JSON: &str = r#"{
    "address": "1DEP8i3QJCsomS4BSMY2RpU1upv62aGvhD",
    "total_received": 4433416,
    "balance": 4433416,
    "n_tx": 7,
    "txrefs": [
        {"tx_hash": "14b1052855bbf6561bc4db8aa501762e7cc1e86994dda9e782a6b73b1ce0dc1e", "tx_output_n": 0, "value": 20213, "confirmations": 54405, "spent": false}
    ],
    "tx_url": "https://api.blockcypher.com/v1/btc/main/txs/"
}"#;

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================
// PATHS
// ============================================

/// **VALUE**: Pins the exact path of an unparameterized address lookup.
///
/// **WHY THIS MATTERS**: The trailing `?` is part of the wire format; the token is
/// appended directly after it.
///
/// **BUG THIS CATCHES**: Would catch the `?` being dropped or doubled.
#[test]
fn given_empty_params_when_address_path_built_then_ends_with_question_mark() {
    let path = address_path("/v1/btc/main", ADDRESS, &Params::new());

    assert_eq!(path, format!("/v1/btc/main/addrs/{ADDRESS}?"));
}

#[test]
fn given_mixed_params_when_address_path_built_then_only_unspent_only_and_before_survive() {
    let params = params(&[
        ("unspentOnly", "true"),
        ("before", "300000"),
        ("limit", "50"),
        ("includeHex", "true"),
    ]);

    let path = address_path("/v1/btc/main", ADDRESS, &params);

    assert_eq!(
        path,
        format!("/v1/btc/main/addrs/{ADDRESS}?before=300000&unspentOnly=true")
    );
}

// ============================================
// GET
// ============================================

#[tokio::test]
async fn given_valid_address_when_get_then_requests_expected_url_and_hydrates_model() {
    let spy = SpyTransport::ok(ADDRESS_JSON);
    let client = client_with(token_config(), &spy);

    let address = client
        .addresses()
        .get(ADDRESS, &Params::new(), None)
        .await
        .unwrap();

    let request = spy.last_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(
        request.url,
        format!("https://api.blockcypher.com/v1/btc/main/addrs/{ADDRESS}?token={TEST_TOKEN}")
    );
    assert!(!request.headers.contains_key(REQUEST_ID_HEADER));
    assert_eq!(address.address.as_deref(), Some(ADDRESS));
    assert_eq!(address.balance, Some(4433416));
    assert_eq!(address.txrefs().len(), 1);
}

#[tokio::test]
async fn given_filtered_params_when_get_then_token_appended_with_ampersand() {
    let spy = SpyTransport::ok(ADDRESS_JSON);
    let client = client_with(token_config(), &spy);

    client
        .addresses()
        .get(ADDRESS, &params(&[("unspentOnly", "true")]), None)
        .await
        .unwrap();

    assert!(
        spy.last_request()
            .url
            .ends_with(&format!("?unspentOnly=true&token={TEST_TOKEN}"))
    );
}

/// **VALUE**: Verifies argument errors short-circuit before any I/O.
///
/// **BUG THIS CATCHES**: Would catch `GET /addrs/?` being sent for an empty identifier.
#[tokio::test]
async fn given_empty_identifier_when_get_then_argument_error_and_no_request() {
    let spy = SpyTransport::ok(ADDRESS_JSON);
    let client = client_with(token_config(), &spy);

    let err = client
        .addresses()
        .get("", &Params::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Argument(ArgumentError::Empty { .. })
    ));
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn given_no_credential_when_get_then_missing_credential_and_no_request() {
    let spy = SpyTransport::ok(ADDRESS_JSON);
    let client = client_with(SdkConfig::default(), &spy);

    let err = client
        .addresses()
        .get(ADDRESS, &Params::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Credential(CredentialError::Missing { .. })
    ));
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn given_certificate_credential_when_get_then_invalid_credential_and_no_request() {
    let spy = SpyTransport::ok(ADDRESS_JSON);
    let client = client_with(token_config(), &spy);
    let context = ApiContext::new().with_credential(Credential::Certificate {
        cert_path: PathBuf::from("c.pem"),
        key_path: PathBuf::from("c.key"),
    });

    let err = client
        .addresses()
        .get(ADDRESS, &Params::new(), Some(&context))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Credential(CredentialError::Invalid { .. })
    ));
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn given_non_json_body_when_get_then_model_error() {
    let spy = SpyTransport::ok("<html>gateway</html>");
    let client = client_with(token_config(), &spy);

    let err = client
        .addresses()
        .get(ADDRESS, &Params::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Model(_)));
}

#[tokio::test]
async fn given_context_chain_override_when_get_then_uses_that_chain() {
    let spy = SpyTransport::ok(ADDRESS_JSON);
    let client = client_with(token_config(), &spy);
    let context = ApiContext::new().for_chain("bcy", "test");

    client
        .addresses()
        .get(ADDRESS, &Params::new(), Some(&context))
        .await
        .unwrap();

    assert!(spy.last_request().url.contains("/v1/bcy/test/addrs/"));
}

// ============================================
// GET MULTIPLE
// ============================================

/// **VALUE**: Verifies batching joins identifiers with `;` and keeps server order.
///
/// **BUG THIS CATCHES**: Would catch `,` separators or results re-sorted client side.
#[tokio::test]
async fn given_two_addresses_when_get_multiple_then_joined_with_semicolon() {
    let spy = SpyTransport::ok(r#"[{"address": "a2"}, {"address": "a1"}]"#);
    let client = client_with(token_config(), &spy);

    let addresses = client
        .addresses()
        .get_multiple(&["a1", "a2"], &Params::new(), None)
        .await
        .unwrap();

    assert!(spy.last_request().url.contains("/v1/btc/main/addrs/a1;a2?"));
    let order: Vec<_> = addresses.iter().filter_map(|a| a.address.as_deref()).collect();
    assert_eq!(order, ["a2", "a1"]);
}

#[tokio::test]
async fn given_empty_list_when_get_multiple_then_argument_error_and_no_request() {
    let spy = SpyTransport::ok("[]");
    let client = client_with(token_config(), &spy);
    let empty: Vec<String> = Vec::new();

    let err = client
        .addresses()
        .get_multiple(&empty, &Params::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Argument(ArgumentError::EmptyList { .. })
    ));
    assert_eq!(spy.calls(), 0);
}

// ============================================
// CREATE AND DELEGATIONS
// ============================================

#[tokio::test]
async fn given_create_when_called_then_posts_without_body_and_returns_keys() {
    let spy = SpyTransport::ok(
        r#"{"private": "priv", "public": "pub", "address": "CFr99", "wif": "BhLfZ"}"#,
    );
    let client = client_with(token_config(), &spy);
    let context = ApiContext::new().with_request_id("create-1");

    let keys = client.addresses().create(Some(&context)).await.unwrap();

    let request = spy.last_request();
    assert_eq!(request.method, HttpMethod::Post);
    assert!(request.url.contains("/v1/btc/main/addrs?token="));
    assert!(request.body.is_none());
    assert_eq!(request.headers[REQUEST_ID_HEADER], "create-1");
    assert_eq!(keys.address.as_deref(), Some("CFr99"));
    assert_eq!(keys.private_key.as_deref(), Some("priv"));
}

#[tokio::test]
async fn given_get_full_address_when_called_then_delegates_to_full_endpoint() {
    let spy = SpyTransport::ok(r#"{"address": "a1", "txs": []}"#);
    let client = client_with(token_config(), &spy);

    let full = client
        .addresses()
        .get_full_address("a1", &params(&[("limit", "10")]), None)
        .await
        .unwrap();

    assert!(spy.last_request().url.contains("/addrs/a1/full?limit=10&token="));
    assert_eq!(full.txs, Some(vec![]));
}

#[tokio::test]
async fn given_get_only_balance_when_called_then_delegates_to_balance_endpoint() {
    let spy = SpyTransport::ok(r#"{"address": "a1", "final_balance": 42}"#);
    let client = client_with(token_config(), &spy);

    let balance = client
        .addresses()
        .get_only_balance("a1", &Params::new(), None)
        .await
        .unwrap();

    assert!(spy.last_request().url.contains("/addrs/a1/balance?token="));
    assert_eq!(balance.final_balance, Some(42));
}
