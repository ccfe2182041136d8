//! HTTP server implementation using hyper.
//!
//! One pipeline applies to every request, in fixed order: cross-origin
//! policy, body read, dispatch, access logging. Handler failures of any
//! kind - a returned error or a panic inside the handler future - are
//! converted into exactly one JSON response by the global error path; the
//! connection task never dies mid-response.

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use futures_util::FutureExt;
use http_body_util::{BodyExt, Full, Limited};
use hyper::body::Incoming;
use hyper::header::HeaderValue;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto;
use tokio::net::TcpListener;
use tokio::sync::{Semaphore, oneshot};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::SharedConfig;
use crate::db;
use crate::response::{self, HttpResponse};
use crate::router::{Context, RouteMatch, RouterHandle};

/// Maximum request body size in bytes (1 MB).
const MAX_BODY_SIZE: usize = 1_048_576;

/// Maximum number of concurrent connections.
const MAX_CONNECTIONS: usize = 128;

/// Timeout for reading request headers (slowloris protection).
const HEADER_READ_TIMEOUT: Duration = Duration::from_secs(2);

/// Methods advertised to cross-origin callers.
const CORS_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Headers cross-origin callers may send.
const CORS_HEADERS: &str = "Content-Type, Authorization";

/// Shared server state.
pub struct State {
    pub config: SharedConfig,
    pub db: Option<db::Handle>,
    pub router: Arc<RouterHandle>,
}

/// Handle to a running server instance.
pub struct Server {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<crate::Result<()>>,
}

impl Server {
    /// The address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Shut down the accept loop and wait for it to finish.
    pub async fn shutdown(self) -> crate::Result<()> {
        let _ = self.shutdown_tx.send(());
        self.task.await.unwrap_or(Ok(()))
    }
}

/// Issue cross-origin headers when the request origin is allow-listed.
///
/// Disallowed or absent origins get no access-control headers at all; the
/// browser enforces the rejection.
fn apply_cors(response: &mut HttpResponse, config: &SharedConfig, origin: Option<&str>) {
    let Some(origin) = origin else { return };
    if !config.cors_origins.iter().any(|allowed| allowed == origin) {
        return;
    }
    let Ok(origin_value) = HeaderValue::from_str(origin) else {
        return;
    };

    let headers = response.headers_mut();
    headers.insert("Access-Control-Allow-Origin", origin_value);
    headers.insert(
        "Access-Control-Allow-Credentials",
        HeaderValue::from_static("true"),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static(CORS_METHODS),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static(CORS_HEADERS),
    );
    headers.insert("Vary", HeaderValue::from_static("Origin"));
}

/// Take the client's `X-Request-Id` when it is a well-formed UUID, otherwise
/// mint a fresh one.
fn request_id(headers: &hyper::http::HeaderMap) -> String {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| uuid::Uuid::try_parse(v).ok())
        .map(|u| u.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

fn panic_message(panic: &Box<dyn Any + Send>) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Route the request and run its handler behind the global error path.
async fn respond(
    parts: hyper::http::request::Parts,
    body: Incoming,
    state: &Arc<State>,
) -> HttpResponse {
    // Preflight is answered before routing; the allow-list headers are
    // attached by the caller.
    if parts.method == Method::OPTIONS {
        return Response::builder()
            .status(StatusCode::NO_CONTENT)
            .body(Full::new(Bytes::new()))
            .unwrap();
    }

    // Reject oversized bodies early via the Content-Length header.
    if let Some(cl) = parts.headers.get(hyper::header::CONTENT_LENGTH)
        && let Ok(len) = cl.to_str().unwrap_or("0").parse::<usize>()
        && len > MAX_BODY_SIZE
    {
        return response::error(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large");
    }

    // Read body with a hard cap (covers chunked encoding).
    let body_bytes = match BodyExt::collect(Limited::new(body, MAX_BODY_SIZE)).await {
        Ok(collected) => collected.to_bytes(),
        Err(_) => return response::error(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large"),
    };

    let path = parts.uri.path().to_string();

    match state.router.match_route(&parts.method, &path) {
        RouteMatch::Matched { handler, params } => {
            let ctx = Context {
                method: parts.method,
                uri: parts.uri,
                headers: parts.headers,
                params,
                body: body_bytes,
                db: state.db.clone(),
                config: Arc::clone(&state.config),
            };

            // Global error path: a returned Err and a panic inside the
            // handler future both end as one uniform 500.
            match std::panic::AssertUnwindSafe(handler(ctx)).catch_unwind().await {
                Ok(Ok(response)) => response,
                Ok(Err(e)) => e.into_response(state.config.production),
                Err(panic) => {
                    error!("handler panicked: {}", panic_message(&panic));
                    crate::Error::Internal("handler panicked".to_string())
                        .into_response(state.config.production)
                }
            }
        }
        RouteMatch::MethodNotAllowed => {
            response::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
        }
        RouteMatch::NotFound => response::error(StatusCode::NOT_FOUND, "Not found"),
    }
}

/// Handle an incoming HTTP request.
async fn handle_request(
    req: Request<Incoming>,
    state: Arc<State>,
) -> Result<HttpResponse, std::convert::Infallible> {
    let started = Instant::now();
    let (parts, body) = req.into_parts();

    let origin = parts
        .headers
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let id = request_id(&parts.headers);
    let method = parts.method.clone();
    let path = parts.uri.path().to_string();

    let mut response = respond(parts, body, &state).await;

    apply_cors(&mut response, &state.config, origin.as_deref());
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert("X-Request-Id", value);
    }

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        request_id = %id,
        "request"
    );

    Ok(response)
}

/// Bind, start accepting connections, and return a handle.
///
/// The returned [`Server`] exposes the bound address and a
/// [`shutdown`](Server::shutdown) method for graceful termination. Callers
/// must only reach this once the database connection is confirmed - the
/// listener is the last thing brought up.
pub async fn start(
    config: SharedConfig,
    db: Option<db::Handle>,
    router: Arc<RouterHandle>,
) -> crate::Result<Server> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;

    let state = Arc::new(State { config, db, router });

    info!("Server listening on http://{}", addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let semaphore = Arc::new(Semaphore::new(MAX_CONNECTIONS));

    let task = tokio::spawn(async move {
        tokio::pin!(shutdown_rx);

        loop {
            tokio::select! {
                result = listener.accept() => {
                    let (stream, remote_addr) = result?;
                    let io = TokioIo::new(stream);

                    match semaphore.clone().try_acquire_owned() {
                        Ok(permit) => {
                            let state = Arc::clone(&state);
                            tokio::spawn(async move {
                                let service = service_fn(move |req| {
                                    let state = Arc::clone(&state);
                                    handle_request(req, state)
                                });

                                let mut builder = auto::Builder::new(TokioExecutor::new());
                                builder.http1()
                                    .timer(TokioTimer::new())
                                    .header_read_timeout(HEADER_READ_TIMEOUT);

                                // A failed connection task is logged and the
                                // process keeps serving.
                                if let Err(e) = builder.serve_connection(io, service).await {
                                    error!("Error serving connection from {}: {}", remote_addr, e);
                                }

                                drop(permit);
                            });
                        }
                        Err(_) => {
                            warn!("Connection limit reached, rejecting {}", remote_addr);
                            tokio::spawn(async move {
                                let service = service_fn(|_req: Request<Incoming>| async {
                                    Ok::<_, std::convert::Infallible>(response::error(
                                        StatusCode::SERVICE_UNAVAILABLE,
                                        "Service unavailable",
                                    ))
                                });

                                let mut builder = auto::Builder::new(TokioExecutor::new());
                                builder.http1()
                                    .timer(TokioTimer::new())
                                    .header_read_timeout(HEADER_READ_TIMEOUT);

                                let _ = builder.serve_connection(io, service).await;
                            });
                        }
                    }
                }
                _ = &mut shutdown_rx => {
                    break;
                }
            }
        }

        Ok(())
    });

    Ok(Server {
        addr,
        shutdown_tx,
        task,
    })
}

/// Run the HTTP server until the accept loop stops.
pub async fn run(
    config: SharedConfig,
    db: Option<db::Handle>,
    router: Arc<RouterHandle>,
) -> crate::Result<()> {
    let server = start(config, db, router).await?;
    server.task.await.unwrap_or(Ok(()))
}
