//! Request pipeline tests against a mock management API.
//!
//! These tests verify:
//! - URL joining and query-string encoding as seen by the server
//! - Header assembly, including bypass-secret precedence
//! - Classification of success, empty and error responses
//! - Normalization of transport failures

use agents_manage_client::{Error, ManageApiConfig, ManageClient, RequestOptions};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde_json::{Value, json};
use wiremock::matchers::{body_string, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: impl Into<String>) -> ManageClient {
    ManageClient::builder()
        .config(ManageApiConfig::from_lookup(|_| None))
        .base_url(base_url)
        .build()
        .expect("client build")
}

// ─────────────────────────────────────────────────────────────────────────────
// URL construction
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_base_path_and_slashes_are_joined_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/manage/tenants/acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(format!("{}/manage/", server.uri()));
    let a: Option<Value> = client.request("/tenants/acme", RequestOptions::new()).await.unwrap();
    let b: Option<Value> = client.request("tenants/acme", RequestOptions::new()).await.unwrap();

    assert_eq!(a, Some(json!({"ok": true})));
    assert_eq!(a, b);
    server.verify().await;
}

#[tokio::test]
async fn test_query_params_skip_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agents"))
        .and(query_param("ref", "feature/x y"))
        .and(query_param("limit", "5"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::new()
        .query("ref", "feature/x y")
        .query("limit", 5)
        .query_opt::<String>("cursor", None);
    let body: Option<Value> = client_for(server.uri()).request("agents", options).await.unwrap();

    assert_eq!(body, Some(json!({"data": []})));
    server.verify().await;
}

// ─────────────────────────────────────────────────────────────────────────────
// Headers
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_default_json_content_type_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/things"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"name":"x"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"name": "x"}})))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::new()
        .method(Method::POST)
        .json(&json!({"name": "x"}))
        .unwrap();
    let body: Option<Value> = client_for(server.uri()).request("things", options).await.unwrap();

    assert_eq!(body.unwrap()["data"]["name"], "x");
    server.verify().await;
}

#[tokio::test]
async fn test_caller_authorization_sent_without_bypass_secret() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::new()
        .header(AUTHORIZATION, HeaderValue::from_static("Bearer user-token"));
    let body: Option<Value> = client_for(server.uri()).request("me", options).await.unwrap();

    assert!(body.is_none());
    server.verify().await;
}

#[tokio::test]
async fn test_bypass_secret_wins_over_caller_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer bypass-secret"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ManageClient::builder()
        .config(ManageApiConfig::from_lookup(|_| None))
        .base_url(server.uri())
        .bypass_secret("bypass-secret")
        .build()
        .unwrap();
    let options = RequestOptions::new()
        .header(AUTHORIZATION, HeaderValue::from_static("Bearer user-token"));
    client.request::<Value>("me", options).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent: Vec<&str> = requests[0]
        .headers
        .get_all("authorization")
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(sent, vec!["Bearer bypass-secret"]);
    server.verify().await;
}

// ─────────────────────────────────────────────────────────────────────────────
// Success classification
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_json_body_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "application/json"))
        .mount(&server)
        .await;

    let options = RequestOptions::new().method(Method::DELETE);
    let body: Option<Value> = client_for(server.uri()).request("x/1", options).await.unwrap();
    assert!(body.is_none());
}

#[tokio::test]
async fn test_non_json_success_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
        .mount(&server)
        .await;

    let body: Option<Value> = client_for(server.uri())
        .request("x", RequestOptions::new())
        .await
        .unwrap();
    assert!(body.is_none());
}

#[tokio::test]
async fn test_json_with_charset_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"data":1}"#, "application/json; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let body: Option<Value> = client_for(server.uri())
        .request("x", RequestOptions::new())
        .await
        .unwrap();
    assert_eq!(body, Some(json!({"data": 1})));
}

#[tokio::test]
async fn test_malformed_success_body_is_internal_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let err = client_for(server.uri())
        .request::<Value>("x", RequestOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
    assert_eq!(err.status(), 500);
}

// ─────────────────────────────────────────────────────────────────────────────
// Error classification
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_body_code_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "error": {"code": "bad_request", "message": "name is required"}
        })))
        .mount(&server)
        .await;

    let err = client_for(server.uri())
        .request::<Value>("x", RequestOptions::new())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Error::Api {
            status: 422,
            code: "bad_request".into(),
            message: "name is required".into(),
        }
    );
}

#[tokio::test]
async fn test_unparsable_error_body_keeps_real_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>upstream down</html>"))
        .mount(&server)
        .await;

    let err = client_for(server.uri())
        .request::<Value>("x", RequestOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { .. }));
    assert_eq!(err.code(), "unknown");
    assert_eq!(err.message(), "Unknown error occurred");
    assert_eq!(err.status(), 503);
}

#[tokio::test]
async fn test_transport_failure_is_internal_error() {
    // Nothing listens on port 1.
    let err = client_for("http://127.0.0.1:1")
        .request::<Value>("x", RequestOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "internal_server_error");
    assert_eq!(err.status(), 500);
    assert!(!err.message().is_empty());
}

#[tokio::test]
async fn test_invalid_base_url_is_internal_error() {
    let err = client_for("not a url")
        .request::<Value>("x", RequestOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "internal_server_error");
}
