use super::super::support::{SpyTransport, client_with, token_config};
use crate::error::{ArgumentError, ClientError};
use crate::handler::{CONTENT_TYPE_HEADER, REQUEST_ID_HEADER};
use crate::http::HttpMethod;
use crate::validation::Params;

use models::{Wallet, WalletBuilder};

use serde_json::Value;

const WALLET_JSON: &str = r#"{"token": "tok", "name": "alice", "addresses": ["a1", "a2"]}"#;

#[tokio::test]
async fn given_built_wallet_when_create_then_posts_wallet_json() {
    let spy = SpyTransport::ok(WALLET_JSON);
    let client = client_with(token_config(), &spy);
    let wallet = WalletBuilder::default()
        .with_name("alice")
        .with_addresses(["a1", "a2"])
        .build()
        .unwrap();

    let created = client.wallets().create(&wallet, None).await.unwrap();

    let request = spy.last_request();
    assert_eq!(request.method, HttpMethod::Post);
    assert!(request.url.contains("/v1/btc/main/wallets?token="));
    assert!(request.has_header(REQUEST_ID_HEADER));
    assert!(request.has_header(CONTENT_TYPE_HEADER));
    let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["name"], "alice");
    assert_eq!(body["addresses"][1], "a2");
    assert_eq!(created.addresses(), ["a1", "a2"]);
}

#[tokio::test]
async fn given_unnamed_wallet_when_create_then_argument_error_and_no_request() {
    let spy = SpyTransport::ok(WALLET_JSON);
    let client = client_with(token_config(), &spy);

    let err = client
        .wallets()
        .create(&Wallet::default(), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Argument(ArgumentError::Empty { .. })
    ));
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn given_wallet_name_when_get_then_requests_wallet_path() {
    let spy = SpyTransport::ok(WALLET_JSON);
    let client = client_with(token_config(), &spy);

    let wallet = client.wallets().get("alice", None).await.unwrap();

    assert!(spy.last_request().url.contains("/v1/btc/main/wallets/alice?token="));
    assert_eq!(wallet.name.as_deref(), Some("alice"));
}

#[tokio::test]
async fn given_addresses_when_add_addresses_then_posts_address_list() {
    let spy = SpyTransport::ok(WALLET_JSON);
    let client = client_with(token_config(), &spy);

    client
        .wallets()
        .add_addresses("alice", &["a3"], None)
        .await
        .unwrap();

    let request = spy.last_request();
    assert!(request.url.contains("/wallets/alice/addresses?token="));
    assert_eq!(request.body.as_deref(), Some(r#"{"addresses":["a3"]}"#));
}

#[tokio::test]
async fn given_filters_when_get_addresses_then_only_used_and_zerobalance_kept() {
    let spy = SpyTransport::ok(WALLET_JSON);
    let client = client_with(token_config(), &spy);
    let params: Params = [("used", "true"), ("limit", "2")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    client
        .wallets()
        .get_addresses("alice", &params, None)
        .await
        .unwrap();

    assert!(
        spy.last_request()
            .url
            .contains("/wallets/alice/addresses?used=true&token=")
    );
}

/// **VALUE**: Verifies address removal is a DELETE with a `;`-joined query and
/// tolerates the empty body the API answers with.
///
/// **BUG THIS CATCHES**: Would catch the empty 204 body being parsed as JSON.
#[tokio::test]
async fn given_addresses_when_remove_addresses_then_deletes_with_joined_query() {
    let spy = SpyTransport::responding(204, "");
    let client = client_with(token_config(), &spy);

    client
        .wallets()
        .remove_addresses("alice", &["a1", "a2"], None)
        .await
        .unwrap();

    let request = spy.last_request();
    assert_eq!(request.method, HttpMethod::Delete);
    assert!(request.url.contains("/wallets/alice/addresses?address=a1;a2&token="));
    assert!(!request.has_header(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn given_wallet_when_generate_address_then_returns_key_chain() {
    let spy = SpyTransport::ok(
        r#"{"name": "alice", "addresses": ["a1", "n3"], "private": "p", "public": "q", "address": "n3", "wif": "w"}"#,
    );
    let client = client_with(token_config(), &spy);

    let keys = client
        .wallets()
        .generate_address("alice", None)
        .await
        .unwrap();

    assert!(spy.last_request().url.contains("/wallets/alice/addresses/generate?token="));
    assert_eq!(keys.address.as_deref(), Some("n3"));
    assert_eq!(keys.wif.as_deref(), Some("w"));
}

#[tokio::test]
async fn given_wallet_when_delete_then_sends_delete() {
    let spy = SpyTransport::responding(204, "");
    let client = client_with(token_config(), &spy);

    client.wallets().delete("alice", None).await.unwrap();

    let request = spy.last_request();
    assert_eq!(request.method, HttpMethod::Delete);
    assert!(request.url.contains("/v1/btc/main/wallets/alice?token="));
}

#[tokio::test]
async fn given_empty_address_list_when_remove_addresses_then_argument_error() {
    let spy = SpyTransport::responding(204, "");
    let client = client_with(token_config(), &spy);
    let none: [&str; 0] = [];

    let err = client
        .wallets()
        .remove_addresses("alice", &none, None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Argument(ArgumentError::EmptyList { .. })
    ));
    assert_eq!(spy.calls(), 0);
}
