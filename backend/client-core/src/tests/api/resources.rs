use super::super::support::{SpyTransport, client_with, token_config};
use crate::error::{ArgumentError, ClientError};
use crate::validation::Params;

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn given_chain_get_when_called_then_requests_base_path() {
    let spy = SpyTransport::ok(r#"{"name": "BTC.main", "height": 360060, "peer_count": 239}"#);
    let client = client_with(token_config(), &spy);

    let chain = client.chain().get(None).await.unwrap();

    assert!(
        spy.last_request()
            .url
            .starts_with("https://api.blockcypher.com/v1/btc/main?token=")
    );
    assert_eq!(chain.name.as_deref(), Some("BTC.main"));
    assert_eq!(chain.height, Some(360060));
}

#[tokio::test]
async fn given_block_height_when_get_then_filters_to_block_params() {
    let spy = SpyTransport::ok(r#"{"height": 294322, "n_tx": 10, "txids": ["a", "b"]}"#);
    let client = client_with(token_config(), &spy);

    let block = client
        .blocks()
        .get(
            "294322",
            &params(&[("txstart", "1"), ("limit", "1"), ("unspentOnly", "true")]),
            None,
        )
        .await
        .unwrap();

    assert!(
        spy.last_request()
            .url
            .contains("/v1/btc/main/blocks/294322?limit=1&txstart=1&token=")
    );
    assert_eq!(block.height, Some(294322));
    assert_eq!(block.txids.as_ref().map(Vec::len), Some(2));
}

#[tokio::test]
async fn given_block_hashes_when_get_multiple_then_list_returned() {
    let spy = SpyTransport::ok(r#"[{"height": 1}, {"height": 2}]"#);
    let client = client_with(token_config(), &spy);

    let blocks = client
        .blocks()
        .get_multiple(&["1", "2"], &Params::new(), None)
        .await
        .unwrap();

    assert!(spy.last_request().url.contains("/blocks/1;2?token="));
    assert_eq!(blocks.len(), 2);
}

/// **VALUE**: Verifies a batched endpoint answering with a single object still
/// yields a one-element list.
///
/// **BUG THIS CATCHES**: Would catch `get_multiple` failing with a deserialization
/// error when only one of the requested hashes exists.
#[tokio::test]
async fn given_single_object_response_when_get_multiple_then_one_element_list() {
    let spy = SpyTransport::ok(r#"{"hash": "abc", "fees": 100}"#);
    let client = client_with(token_config(), &spy);

    let txs = client
        .transactions()
        .get_multiple(&["abc", "def"], &Params::new(), None)
        .await
        .unwrap();

    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].hash.as_deref(), Some("abc"));
}

#[tokio::test]
async fn given_transaction_hash_when_get_then_filters_to_transaction_params() {
    let spy = SpyTransport::ok(
        r#"{"hash": "f854", "inputs": [{"prev_hash": "p", "output_index": 1}], "outputs": []}"#,
    );
    let client = client_with(token_config(), &spy);

    let tx = client
        .transactions()
        .get(
            "f854",
            &params(&[("includeHex", "true"), ("before", "1")]),
            None,
        )
        .await
        .unwrap();

    assert!(
        spy.last_request()
            .url
            .contains("/v1/btc/main/txs/f854?includeHex=true&token=")
    );
    assert_eq!(tx.inputs().len(), 1);
    assert!(tx.outputs().is_empty());
}

#[tokio::test]
async fn given_unconfirmed_when_get_then_requests_collection_path() {
    let spy = SpyTransport::ok(r#"[{"hash": "u1"}, {"hash": "u2"}, {"hash": "u3"}]"#);
    let client = client_with(token_config(), &spy);

    let txs = client.transactions().get_unconfirmed(None).await.unwrap();

    assert!(spy.last_request().url.contains("/v1/btc/main/txs?token="));
    assert_eq!(txs.len(), 3);
}

#[tokio::test]
async fn given_transaction_hash_with_slash_when_get_then_argument_error() {
    let spy = SpyTransport::ok("{}");
    let client = client_with(token_config(), &spy);

    let err = client
        .transactions()
        .get("abc/../wallets", &Params::new(), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Argument(ArgumentError::Malformed { .. })
    ));
    assert_eq!(spy.calls(), 0);
}

#[tokio::test]
async fn given_balance_params_when_get_multiple_then_only_omit_wallet_addresses_kept() {
    let spy = SpyTransport::ok(r#"[{"address": "a1"}, {"address": "a2"}]"#);
    let client = client_with(token_config(), &spy);

    let balances = client
        .balances()
        .get_multiple(
            &["a1", "a2"],
            &params(&[("omitWalletAddresses", "true"), ("limit", "3")]),
            None,
        )
        .await
        .unwrap();

    assert!(
        spy.last_request()
            .url
            .contains("/addrs/a1;a2/balance?omitWalletAddresses=true&token=")
    );
    assert_eq!(balances.len(), 2);
}

#[tokio::test]
async fn given_full_address_params_when_get_then_full_allow_list_applies() {
    let spy = SpyTransport::ok(r#"{"address": "a1", "txs": [{"hash": "t1"}]}"#);
    let client = client_with(token_config(), &spy);

    let full = client
        .full_addresses()
        .get(
            "a1",
            &params(&[("txlimit", "5"), ("after", "10"), ("unspentOnly", "true")]),
            None,
        )
        .await
        .unwrap();

    assert!(
        spy.last_request()
            .url
            .contains("/addrs/a1/full?after=10&txlimit=5&token=")
    );
    assert_eq!(full.txs().len(), 1);
}
