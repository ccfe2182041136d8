//! Error types with HTTP status code mapping.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};

/// Body of every 5xx response, regardless of the underlying failure.
const SERVER_ERROR_MESSAGE: &str = "Erreur serveur.";

/// Error type for the backend.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Collaborator errors
    #[error("{0}")]
    Mailer(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    // System errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map error to HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,

            // Config errors -> 500 (shouldn't happen at runtime)
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,

            Error::Mailer(_)
            | Error::Database(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert error into an HTTP response.
    ///
    /// Server errors always carry the uniform message; the underlying cause
    /// is logged, and exposed under `detail` only outside production.
    pub fn into_response(self, production: bool) -> Response<Full<Bytes>> {
        let status = self.status_code();
        let body = if status.is_server_error() {
            tracing::error!("unhandled error: {self}");
            let mut body = serde_json::json!({ "message": SERVER_ERROR_MESSAGE });
            if !production {
                body["detail"] = serde_json::Value::String(self.to_string());
            }
            body
        } else {
            serde_json::json!({ "error": self.to_string() })
        };

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from(body.to_string())))
            .unwrap()
    }
}

/// Result type alias using the backend's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
