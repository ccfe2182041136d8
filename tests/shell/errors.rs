//! Global error path: uniform 500 body, production detail hiding, panic
//! recovery, and pre-dispatch rejections.

use fiches::response::HttpResponse;
use fiches::router::Router;
use fiches::server::Server;

use super::harness;

async fn start_probe(production: bool) -> Server {
    let mut config = harness::test_config();
    config.production = production;

    let mut router = Router::new();
    router.get("/boom", |_ctx| async move {
        let result: fiches::Result<HttpResponse> =
            Err(fiches::Error::Internal("secret detail".to_string()));
        result
    });
    router.get("/bad", |_ctx| async move {
        let result: fiches::Result<HttpResponse> =
            Err(fiches::Error::BadRequest("nope".to_string()));
        result
    });
    router.get("/panic", |_ctx| async move {
        panic!("test panic");
    });
    router.get("/ping", |_ctx| async move {
        fiches::response::ok(&serde_json::json!({ "pong": true }))
    });

    harness::start_raw(config, router).await
}

/// A handler error becomes exactly one uniform 500; outside production the
/// underlying message rides along under `detail`.
#[tokio::test]
async fn handler_error_yields_uniform_500_with_detail() {
    let server = start_probe(false).await;
    let addr = server.addr();

    let response = harness::get(addr, "/boom").await;

    server.shutdown().await.unwrap();

    assert_eq!(harness::status_of(&response), "500");
    let body = harness::body_of(&response);
    assert!(
        body.contains("Erreur serveur."),
        "expected uniform message, got: {body}"
    );
    assert!(
        body.contains("secret detail"),
        "expected detail outside production, got: {body}"
    );
}

/// In production the same failure carries no detail key at all.
#[tokio::test]
async fn production_hides_error_detail() {
    let server = start_probe(true).await;
    let addr = server.addr();

    let response = harness::get(addr, "/boom").await;

    server.shutdown().await.unwrap();

    assert_eq!(harness::status_of(&response), "500");
    let body = harness::body_of(&response);
    assert!(body.contains("Erreur serveur."), "unexpected body: {body}");
    assert!(!body.contains("detail"), "detail leaked in production: {body}");
    assert!(!body.contains("secret detail"), "cause leaked: {body}");
}

/// Client-classified errors keep their 4xx shape and never wear the
/// server-error message.
#[tokio::test]
async fn client_errors_keep_their_status() {
    let server = start_probe(false).await;
    let addr = server.addr();

    let response = harness::get(addr, "/bad").await;

    server.shutdown().await.unwrap();

    assert_eq!(harness::status_of(&response), "400");
    let body = harness::body_of(&response);
    assert!(body.contains(r#""error":"Bad request: nope""#), "unexpected body: {body}");
    assert!(!body.contains("Erreur serveur."), "unexpected body: {body}");
}

/// A panicking handler answers the uniform 500 and the process keeps
/// serving subsequent requests.
#[tokio::test]
async fn handler_panic_yields_500_and_server_survives() {
    let server = start_probe(false).await;
    let addr = server.addr();

    let response = harness::get(addr, "/panic").await;
    assert_eq!(harness::status_of(&response), "500");
    assert!(
        harness::body_of(&response).contains("Erreur serveur."),
        "unexpected body:\n{response}"
    );

    let follow_up = harness::get(addr, "/ping").await;

    server.shutdown().await.unwrap();

    assert_eq!(harness::status_of(&follow_up), "200");
    assert!(harness::body_of(&follow_up).contains("pong"));
}

/// A known path with the wrong method is 405, not 404 and not a redirect.
#[tokio::test]
async fn wrong_method_is_rejected() {
    let server = start_probe(false).await;
    let addr = server.addr();

    let request = "DELETE /ping HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n";
    let response = harness::raw_request(addr, request.as_bytes()).await;

    server.shutdown().await.unwrap();

    assert_eq!(harness::status_of(&response), "405");
}

/// Bodies over the cap are rejected from the Content-Length header alone.
#[tokio::test]
async fn oversized_body_is_rejected_before_dispatch() {
    let server = start_probe(false).await;
    let addr = server.addr();

    let request = "POST /ping HTTP/1.1\r\nHost: localhost\r\nContent-Length: 10485760\r\nConnection: close\r\n\r\n";
    let response = harness::raw_request(addr, request.as_bytes()).await;

    server.shutdown().await.unwrap();

    assert_eq!(harness::status_of(&response), "413");
}

/// `Error::into_response` never leaks the cause to production clients.
#[test]
fn server_error_body_is_generic_in_production() {
    let response =
        fiches::Error::Internal("SELECT * FROM fiches WHERE secret".to_string()).into_response(true);

    let body = tokio_test::block_on(http_body_util::BodyExt::collect(response.into_body()))
        .unwrap()
        .to_bytes();
    let body = String::from_utf8_lossy(&body);

    assert!(!body.contains("SELECT"), "cause leaked: {body}");
    assert!(body.contains("Erreur serveur."), "unexpected body: {body}");
}
