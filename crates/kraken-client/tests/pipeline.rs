//! Status-code handling and header injection of the shared request pipeline.

mod common;

use common::client_for;
use kraken_client::api::{Channel, Params, Root};
use kraken_client::{ClientConfig, Credentials, KrakenClient};
use reqwest::Method;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn every_request_carries_identity_and_version_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kraken/"))
        .and(header("Authorization", "OAuth access-token"))
        .and(header("Client-ID", "client-id"))
        .and(header("Accept", "application/vnd.twitchtv.v5+json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"token":{"valid":true}}"#))
        .expect(1)
        .mount(&server)
        .await;

    let root = client_for(&server).get_root().await.unwrap();
    assert!(root.token.valid);
}

#[tokio::test]
async fn get_root_decodes_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kraken/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"token":{"valid":true,"authorization":{"scopes":["channel_read"],"created_at":"2016-11-20T17:26:13Z","updated_at":"2016-11-20T17:26:13Z"},"user_name":"testing_user","client_id":"testing-client-id"}}"#,
        ))
        .mount(&server)
        .await;

    let root = client_for(&server).get_root().await.unwrap();
    let auth = root.token.authorization.unwrap();
    assert_eq!(auth.scopes, vec!["channel_read".to_string()]);
    assert_eq!(root.token.user_name.as_deref(), Some("testing_user"));
    assert_eq!(root.token.client_id.as_deref(), Some("testing-client-id"));
}

#[tokio::test]
async fn api_error_body_becomes_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kraken/"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"error":"Bad Request","status":400,"message":"Some error message"}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server).get_root().await.unwrap_err();
    assert_eq!(err.error, "Bad Request");
    assert_eq!(err.status, 400);
    assert_eq!(err.message, "Some error message");
    assert!(!err.is_local());
}

#[tokio::test]
async fn undecodable_error_body_yields_empty_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kraken/channel"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_channel().await.unwrap_err();
    assert_eq!(err, kraken_client::ApiError::default());
}

#[tokio::test]
async fn malformed_success_body_is_a_local_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kraken/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"foo":{{]]"}}"#))
        .mount(&server)
        .await;

    let err = client_for(&server).get_root().await.unwrap_err();
    assert_eq!(err.status, -1);
    assert_eq!(err.error, "Kraken client error");
    assert!(err.message.contains("line 1"), "{}", err.message);
}

#[tokio::test]
async fn no_content_returns_default_without_decoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kraken/channel"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let channel = client_for(&server).get_channel().await.unwrap();
    assert_eq!(channel, Channel::default());
}

#[tokio::test]
async fn empty_success_body_returns_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kraken/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let root = client_for(&server).get_root().await.unwrap();
    assert_eq!(root, Root::default());
}

#[tokio::test]
async fn bodiless_error_status_is_still_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kraken/channel"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).get_channel().await.unwrap_err();
    assert_eq!(err, kraken_client::ApiError::default());
}

#[tokio::test]
async fn transport_failure_is_a_local_error() {
    let config = ClientConfig::new(Credentials::new("client-id", "access-token"))
        .with_api_url("http://127.0.0.1:1/kraken");
    let client = KrakenClient::with_config(config, reqwest::Client::new());

    let err = client.get_root().await.unwrap_err();
    assert_eq!(err.status, -1);
    assert_eq!(err.error, "Kraken client error");
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn repeated_get_decodes_equal_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kraken/channel"))
        .respond_with(ResponseTemplate::new(200).set_body_string(common::CHANNEL_JSON))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.get_channel().await.unwrap();
    let second = client.get_channel().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn generic_call_supports_unwrapped_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kraken/streams/summary"))
        .and(query_param("game", "Nioh"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"channels":3,"viewers":42}"#))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/kraken/things"))
        .and(body_string("a=1&b=two"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let summary: serde_json::Value = client
        .call(Method::GET, "streams/summary", &Params::new().set("game", "Nioh"))
        .await
        .unwrap();
    assert_eq!(summary["viewers"], 42);

    let created: serde_json::Value = client
        .call(Method::POST, "things", &Params::new().set("b", "two").set("a", 1))
        .await
        .unwrap();
    assert_eq!(created["ok"], true);
}
