//! The mailer surface: the operator test endpoint and the send-email route.

use std::sync::Arc;

use serde_json::json;

use super::harness::{self, StubMailer};

/// A reachable provider yields the provider payload under `result`.
#[tokio::test]
async fn email_test_returns_provider_result() {
    let server = harness::start_app(
        harness::test_config(),
        Arc::new(StubMailer::succeeding(
            json!({ "id": "<msg@mg>", "message": "Queued. Thank you." }),
        )),
    )
    .await;
    let addr = server.addr();

    let response = harness::post_json(addr, "/_email/test", r#"{"to":"dest@example.com"}"#).await;

    server.shutdown().await.unwrap();

    assert_eq!(harness::status_of(&response), "200");
    let body = harness::body_of(&response);
    assert!(body.contains(r#""ok":true"#), "unexpected body: {body}");
    assert!(body.contains("Queued. Thank you."), "unexpected body: {body}");
    // The stub records what the endpoint asked it to send.
    assert!(
        body.contains(r#""subject":"Test Mailgun""#),
        "expected the fixed subject: {body}"
    );
    assert!(
        body.contains(r#""to":"dest@example.com""#),
        "expected the recipient passed through: {body}"
    );
}

/// A failing provider surfaces its message under `error`, locally, as 500.
#[tokio::test]
async fn email_test_surfaces_mailer_failure() {
    let server = harness::start_app(
        harness::test_config(),
        Arc::new(StubMailer::failing("Invalid private key")),
    )
    .await;
    let addr = server.addr();

    let response = harness::post_json(addr, "/_email/test", r#"{"to":"dest@example.com"}"#).await;

    server.shutdown().await.unwrap();

    assert_eq!(harness::status_of(&response), "500");
    assert!(
        harness::body_of(&response).contains(r#""error":"Invalid private key""#),
        "unexpected body:\n{response}"
    );
}

/// A body without a recipient is a client error, not a mailer call.
#[tokio::test]
async fn email_test_requires_recipient() {
    let server = harness::start_app(
        harness::test_config(),
        Arc::new(StubMailer::failing("must not be called")),
    )
    .await;
    let addr = server.addr();

    let response = harness::post_json(addr, "/_email/test", "{}").await;

    server.shutdown().await.unwrap();

    assert_eq!(harness::status_of(&response), "400");
}

/// The module route accepts per-request subject overrides.
#[tokio::test]
async fn send_email_route_delegates_to_mailer() {
    let server = harness::start_app(
        harness::test_config(),
        Arc::new(StubMailer::succeeding(json!({ "message": "Queued" }))),
    )
    .await;
    let addr = server.addr();

    let response = harness::post_json(
        addr,
        "/api/send-email",
        r#"{"to":"dest@example.com","subject":"Relance fiche"}"#,
    )
    .await;

    server.shutdown().await.unwrap();

    assert_eq!(harness::status_of(&response), "200");
    let body = harness::body_of(&response);
    assert!(body.contains(r#""ok":true"#), "unexpected body: {body}");
    assert!(
        body.contains(r#""subject":"Relance fiche""#),
        "expected the override forwarded: {body}"
    );
}

/// Module route failures keep the local `{error}` shape.
#[tokio::test]
async fn send_email_route_surfaces_mailer_failure() {
    let server = harness::start_app(
        harness::test_config(),
        Arc::new(StubMailer::failing("Domain not verified")),
    )
    .await;
    let addr = server.addr();

    let response =
        harness::post_json(addr, "/api/send-email", r#"{"to":"dest@example.com"}"#).await;

    server.shutdown().await.unwrap();

    assert_eq!(harness::status_of(&response), "500");
    assert!(
        harness::body_of(&response).contains(r#""error":"Domain not verified""#),
        "unexpected body:\n{response}"
    );
}
