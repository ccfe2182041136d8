//! Fiches - HTTP backend for student/school contract records.
//!
//! The crate is organized around a small application shell:
//!
//! - **Config**: immutable snapshot of the process environment
//! - **Db**: MongoDB connector with an explicit readiness state
//! - **Router**: HTTP routing with path parameters
//! - **Server**: hyper-based HTTP server with CORS and access logging
//! - **Module**: trait for pluggable entity route modules
//! - **Mailer**: transactional email via the Mailgun HTTP API
//!
//! [`app::build_router`] assembles the entity modules, the operator
//! endpoints and the catch-all frontend redirect into one route table;
//! `main.rs` sequences startup so the listener is only bound once the
//! database connection is confirmed.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use fiches::config::Config;
//! use fiches::mailer::{Mailer, Mailgun};
//! use fiches::modules::{Contracts, Email, Precontracts, Schools, Students};
//! use fiches::{Module, app, db, server};
//!
//! #[tokio::main]
//! async fn main() -> fiches::Result<()> {
//!     let config = Arc::new(Config::from_env());
//!     let db = db::connect(config.mongo_uri.as_deref().unwrap()).await?;
//!
//!     let mailer: Arc<dyn Mailer> = Arc::new(Mailgun::from_config(&config));
//!     let email = Email::new(Arc::clone(&mailer));
//!     let modules: [&dyn Module; 5] = [&Students, &Schools, &Precontracts, &Contracts, &email];
//!
//!     let router = app::build_router(mailer, &modules);
//!     server::run(config, Some(db), router.into_handle()).await
//! }
//! ```

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod mailer;
pub mod module;
pub mod modules;
pub mod response;
pub mod router;
pub mod server;

// Re-export main types at crate root
pub use config::{Config, SharedConfig};
pub use db::Handle as DbHandle;
pub use error::{Error, Result};
pub use mailer::Mailer;
pub use module::Module;
pub use router::{Context, Router};

// Re-export commonly used dependencies for convenience
pub use hyper::Method;
pub use serde_json::json;
