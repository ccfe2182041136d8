//! Application shell assembly.
//!
//! The route table is built here as one explicit priority list: operator
//! endpoints, the entity modules, the legacy precontract aliases, the
//! shell-owned liveness probe, and finally the single catch-all redirect
//! whose reserved words fall through to not-found. Static routes always
//! outrank the catch-all in the route table itself, so mounting order can
//! never hand an entity prefix to the redirect.

use std::sync::Arc;

use hyper::StatusCode;
use serde_json::json;

use crate::db::ReadyState;
use crate::error::{Error, Result};
use crate::mailer::Mailer;
use crate::module::Module;
use crate::modules::precontracts;
use crate::response::{self, HttpResponse};
use crate::router::{Context, Router};

/// Single-segment paths that must never be treated as a form identifier.
pub const RESERVED_SEGMENTS: [&str; 4] = ["api", "_debug", "_email", "favicon.ico"];

/// Fixed content of the `/_email/test` message.
const TEST_SUBJECT: &str = "Test Mailgun";
const TEST_TEXT: &str = "OK";
const TEST_HTML: &str = "<b>OK</b>";

/// Build the full route table.
pub fn build_router(mailer: Arc<dyn Mailer>, modules: &[&dyn Module]) -> Router {
    let mut router = Router::new();

    // Operator endpoints.
    router.get("/_debug/status", debug_status);
    {
        let mailer = Arc::clone(&mailer);
        router.post("/_email/test", move |ctx| {
            let mailer = Arc::clone(&mailer);
            async move { email_test(ctx, mailer).await }
        });
    }

    // Entity modules.
    for module in modules {
        tracing::debug!(module = module.name(), "mounting routes");
        module.routes(&mut router);
    }

    // Legacy path spelling, resolving to the same precontract handlers.
    router.get("/api/precontrat/{id}", precontracts::get_by_id);
    router.put("/api/precontrat/{id}", precontracts::update_by_id);

    // Shell-owned liveness probe, independent of the email module.
    router.get("/api/send-email/health", |_ctx| async move {
        response::ok(&json!({ "ok": true, "source": "app" }))
    });

    // Catch-all: legacy links carry the form identifier as the only path
    // segment.
    router.get("/{idFiche}", redirect_to_form);

    router
}

/// `GET /_debug/status` - configuration completeness and DB readiness.
async fn debug_status(ctx: Context) -> Result<HttpResponse> {
    let ready = ctx
        .db()
        .map(|db| db.ready_state())
        .unwrap_or(ReadyState::Disconnected);

    response::ok(&json!({
        "envMissing": ctx.config.missing(),
        "mongoReadyState": ready as u8,
    }))
}

/// `POST /_email/test` - send a fixed test message, recovering any mailer
/// failure locally as a 500 with the provider's message.
async fn email_test(ctx: Context, mailer: Arc<dyn Mailer>) -> Result<HttpResponse> {
    #[derive(serde::Deserialize)]
    struct Input {
        to: String,
    }

    let input: Input = ctx.json()?;
    match mailer
        .send(&input.to, TEST_SUBJECT, TEST_TEXT, TEST_HTML)
        .await
    {
        Ok(result) => response::ok(&json!({ "ok": true, "result": result })),
        Err(e) => {
            tracing::error!("email test failed: {e}");
            response::json(
                StatusCode::INTERNAL_SERVER_ERROR,
                &json!({ "error": e.to_string() }),
            )
        }
    }
}

/// `GET /{idFiche}` - redirect legacy form links to the frontend.
///
/// The identifier is substituted verbatim; no validation is attempted. The
/// target host comes from operator-controlled configuration.
async fn redirect_to_form(ctx: Context) -> Result<HttpResponse> {
    let id = ctx.require_param("idFiche")?;
    if RESERVED_SEGMENTS.contains(&id) {
        // Nothing else matches these single segments; yield not-found
        // rather than a redirect.
        return Err(Error::NotFound(format!("No route for /{id}")));
    }

    response::redirect(&format!("{}/form/{}", ctx.config.frontend_url(), id))
}
