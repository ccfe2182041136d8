//! Email sending routes.

use std::sync::Arc;

use hyper::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::mailer::Mailer;
use crate::module::Module;
use crate::response;
use crate::router::Router;

#[derive(Deserialize)]
struct SendInput {
    to: String,
    #[serde(default = "default_subject")]
    subject: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    html: String,
}

fn default_subject() -> String {
    "Message".to_string()
}

/// `POST /api/send-email`, delegating to the mail collaborator.
pub struct Email {
    mailer: Arc<dyn Mailer>,
}

impl Email {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }
}

impl Module for Email {
    fn name(&self) -> &'static str {
        "email"
    }

    fn routes(&self, router: &mut Router) {
        let mailer = Arc::clone(&self.mailer);
        router.post("/api/send-email", move |ctx| {
            let mailer = Arc::clone(&mailer);
            async move {
                let input: SendInput = ctx.json()?;
                match mailer
                    .send(&input.to, &input.subject, &input.text, &input.html)
                    .await
                {
                    Ok(result) => response::ok(&json!({ "ok": true, "result": result })),
                    Err(e) => {
                        // Mailer failures stay local to this route; they are
                        // never retried.
                        tracing::error!("send-email failed: {e}");
                        response::json(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            &json!({ "error": e.to_string() }),
                        )
                    }
                }
            }
        });
    }
}
