//! Transactional email via the Mailgun HTTP API.
//!
//! The shell needs exactly one operation from its mail collaborator: send a
//! message and surface the provider's response payload. The trait keeps the
//! email endpoints honest in tests, where a stub stands in for the provider.

use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::router::BoxFuture;

/// One-operation mail collaborator.
pub trait Mailer: Send + Sync {
    /// Send a message and return the provider's response payload.
    fn send<'a>(
        &'a self,
        to: &str,
        subject: &str,
        text: &str,
        html: &str,
    ) -> BoxFuture<'a, Result<Value>>;
}

/// Mailgun-backed implementation.
///
/// Posts the message form to `https://api.mailgun.net/v3/<domain>/messages`
/// with basic auth. Missing credentials fail the send, never the process.
pub struct Mailgun {
    http: reqwest::Client,
    domain: Option<String>,
    api_key: Option<String>,
}

impl Mailgun {
    pub fn from_config(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            domain: config.mailgun_domain.clone(),
            api_key: config.mailgun_api_key.clone(),
        }
    }
}

impl Mailer for Mailgun {
    fn send<'a>(
        &'a self,
        to: &str,
        subject: &str,
        text: &str,
        html: &str,
    ) -> BoxFuture<'a, Result<Value>> {
        let to = to.to_string();
        let subject = subject.to_string();
        let text = text.to_string();
        let html = html.to_string();

        Box::pin(async move {
            let domain = self
                .domain
                .as_deref()
                .ok_or_else(|| Error::Mailer("MAILGUN_DOMAIN is not configured".to_string()))?;
            let api_key = self
                .api_key
                .as_deref()
                .ok_or_else(|| Error::Mailer("MAILGUN_API_KEY is not configured".to_string()))?;

            let url = format!("https://api.mailgun.net/v3/{domain}/messages");
            let from = format!("Fiches <postmaster@{domain}>");
            let params = [
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("subject", subject.as_str()),
                ("text", text.as_str()),
                ("html", html.as_str()),
            ];

            let response = self
                .http
                .post(&url)
                .basic_auth("api", Some(api_key))
                .form(&params)
                .send()
                .await
                .map_err(|e| Error::Mailer(e.to_string()))?;

            let status = response.status();
            let body: Value = response
                .json()
                .await
                .map_err(|e| Error::Mailer(e.to_string()))?;

            if !status.is_success() {
                let message = body
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("mail provider rejected the request");
                return Err(Error::Mailer(message.to_string()));
            }

            Ok(body)
        })
    }
}
