use crate::http_tests::helpers::TEST_TOKEN;

use blockcypher_client::config::HttpConfig;
use blockcypher_client::error::TransportError;
use blockcypher_client::{HttpMethod, HttpRequest, ReqwestTransport, Transport};

use std::time::Duration;

use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the transport sends method, headers and body exactly as prepared.
///
/// **WHY THIS MATTERS**: Everything above the transport (token, request id,
/// content type) is worthless if it is not what goes over the wire.
///
/// **BUG THIS CATCHES**: Would catch headers being dropped or the body re-encoded.
#[tokio::test]
async fn given_prepared_post_when_executed_then_server_receives_it_verbatim() {
    // GIVEN: A server expecting a specific POST
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/btc/main/wallets"))
        .and(query_param("token", TEST_TOKEN))
        .and(header("BlockCypher-Request-Id", "req-1"))
        .and(body_string(r#"{"name":"alice"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"name":"alice"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(&HttpConfig::default()).unwrap();
    let mut request = HttpRequest::new(
        HttpMethod::Post,
        format!("{}/v1/btc/main/wallets?token={TEST_TOKEN}", server.uri()),
    );
    request
        .headers
        .insert("BlockCypher-Request-Id".to_string(), "req-1".to_string());
    request.body = Some(r#"{"name":"alice"}"#.to_string());

    // WHEN: Executing it
    let response = transport.execute(&request).await.unwrap();

    // THEN: Status and body come back as sent by the server
    assert_eq!(response.status.as_u16(), 201);
    assert_eq!(response.body, br#"{"name":"alice"}"#);
}

/// **VALUE**: Verifies error statuses are returned as responses, not transport errors.
///
/// **WHY THIS MATTERS**: Status interpretation belongs to the call layer so that
/// every transport (including test doubles) behaves the same.
///
/// **BUG THIS CATCHES**: Would catch `error_for_status()` sneaking into the transport.
#[tokio::test]
async fn given_429_when_executed_then_response_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string(r#"{"error":"Limits reached."}"#))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(&HttpConfig::default()).unwrap();
    let request = HttpRequest::new(HttpMethod::Get, format!("{}/v1/btc/main", server.uri()));

    let response = transport.execute(&request).await.unwrap();

    assert!(response.status.is_client_error());
    assert!(response.body_text().contains("Limits reached."));
}

#[tokio::test]
async fn given_slow_server_when_executed_then_network_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = HttpConfig {
        timeout_secs: 1,
        user_agent: None,
    };
    let transport = ReqwestTransport::new(&config).unwrap();
    let request = HttpRequest::new(HttpMethod::Get, format!("{}/v1/btc/main", server.uri()));

    let err = transport.execute(&request).await.unwrap_err();

    assert!(matches!(
        err,
        TransportError::Network {
            is_timeout: true,
            ..
        }
    ));
}

#[tokio::test]
async fn given_unreachable_host_when_executed_then_network_error() {
    let transport = ReqwestTransport::new(&HttpConfig::default()).unwrap();
    let request = HttpRequest::new(HttpMethod::Get, "http://127.0.0.1:1/v1/btc/main");

    let err = transport.execute(&request).await.unwrap_err();

    assert!(matches!(err, TransportError::Network { .. }));
    assert!(err.status_code().is_none());
}
