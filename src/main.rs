//! Process entry point: configuration, database gate, HTTP listener.
//!
//! Startup order matters: the listener is only bound once the database
//! connection is confirmed, and a connect failure terminates the process
//! before any port is opened.

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fiches::config::Config;
use fiches::mailer::{Mailer, Mailgun};
use fiches::module::Module;
use fiches::modules::{Contracts, Email, Precontracts, Schools, Students};
use fiches::{app, db, server};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Panics escaping the main control flow are logged before the process
    // dies with a non-zero status. Request handlers are shielded separately
    // in the server: a panicking handler answers 500 and the process keeps
    // serving.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        error!("panic: {panic_info}");
        default_hook(panic_info);
    }));

    let config = Arc::new(Config::from_env());
    for key in config.missing() {
        warn!("environment variable {key} is not set");
    }

    // The listener must never be bound without a confirmed database
    // connection.
    let Some(mongo_uri) = config.mongo_uri.clone() else {
        error!("MONGO_URI is not set; cannot start");
        std::process::exit(1);
    };
    let db = match db::connect(&mongo_uri).await {
        Ok(handle) => handle,
        Err(e) => {
            error!("MongoDB connection failed: {e}");
            std::process::exit(1);
        }
    };
    info!("MongoDB connected");

    let mailer: Arc<dyn Mailer> = Arc::new(Mailgun::from_config(&config));
    let email = Email::new(Arc::clone(&mailer));
    let modules: [&dyn Module; 5] = [&Students, &Schools, &Precontracts, &Contracts, &email];
    let router = app::build_router(mailer, &modules);

    if let Err(e) = server::run(config, Some(db), router.into_handle()).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
