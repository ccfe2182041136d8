//! Process configuration.
//!
//! The environment is read exactly once at startup into an immutable
//! [`Config`]. Most variables are merely *listed*: their absence is
//! observable through `GET /_debug/status` but does not prevent the process
//! from starting. Only `MONGO_URI` is load-bearing - without it the server
//! never binds its port.

use std::sync::Arc;

/// Required variables, in the order `/_debug/status` reports them.
pub const REQUIRED_VARS: [&str; 6] = [
    "MONGO_URI",
    "JWT_SECRET",
    "RESET_PASSWORD_KEY",
    "CLIENT_URL",
    "MAILGUN_DOMAIN",
    "MAILGUN_API_KEY",
];

/// Frontend base URL used by the catch-all redirect when `CLIENT_URL` is unset.
const DEFAULT_CLIENT_URL: &str = "http://localhost:4200";

/// Listen port used when `PORT` is unset or unparseable.
const DEFAULT_PORT: u16 = 3000;

/// Origins permitted by the cross-origin policy in the reference deployment.
const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:4200", "http://127.0.0.1:4200"];

/// Immutable snapshot of the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mongo_uri: Option<String>,
    /// Reserved for the auth collaborator; only presence is checked.
    pub jwt_secret: Option<String>,
    /// Reserved for the password-reset flow; only presence is checked.
    pub reset_password_key: Option<String>,
    pub client_url: Option<String>,
    pub mailgun_domain: Option<String>,
    pub mailgun_api_key: Option<String>,
    /// Origins allowed by the cross-origin policy.
    pub cors_origins: Vec<String>,
    /// True when `NODE_ENV=production`; suppresses error detail in responses.
    pub production: bool,
}

/// Shared, read-only configuration handed to the shell and all handlers.
pub type SharedConfig = Arc<Config>;

impl Config {
    /// Read the environment into a snapshot.
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            mongo_uri: std::env::var("MONGO_URI").ok(),
            jwt_secret: std::env::var("JWT_SECRET").ok(),
            reset_password_key: std::env::var("RESET_PASSWORD_KEY").ok(),
            client_url: std::env::var("CLIENT_URL").ok(),
            mailgun_domain: std::env::var("MAILGUN_DOMAIN").ok(),
            mailgun_api_key: std::env::var("MAILGUN_API_KEY").ok(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            production: std::env::var("NODE_ENV").is_ok_and(|v| v == "production"),
        }
    }

    /// Frontend base URL for the catch-all redirect.
    pub fn frontend_url(&self) -> &str {
        self.client_url.as_deref().unwrap_or(DEFAULT_CLIENT_URL)
    }

    /// Required variables absent at startup, in [`REQUIRED_VARS`] order.
    pub fn missing(&self) -> Vec<&'static str> {
        REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| !self.is_set(key))
            .collect()
    }

    fn is_set(&self, key: &str) -> bool {
        match key {
            "MONGO_URI" => self.mongo_uri.is_some(),
            "JWT_SECRET" => self.jwt_secret.is_some(),
            "RESET_PASSWORD_KEY" => self.reset_password_key.is_some(),
            "CLIENT_URL" => self.client_url.is_some(),
            "MAILGUN_DOMAIN" => self.mailgun_domain.is_some(),
            "MAILGUN_API_KEY" => self.mailgun_api_key.is_some(),
            _ => false,
        }
    }
}
