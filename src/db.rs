//! MongoDB connector.
//!
//! [`connect`] establishes a single client, confirms connectivity with an
//! admin `ping`, and returns a cloneable [`Handle`]. The handle tracks a
//! readiness value using the integer enumeration the operator tooling
//! already consumes (1 = connected).

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, Database};

/// Database name used when the connection string does not carry one.
const DEFAULT_DATABASE: &str = "fiches";

/// Connection readiness, reported verbatim by `GET /_debug/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ReadyState {
    Disconnected = 0,
    Connected = 1,
    Connecting = 2,
    Disconnecting = 3,
}

impl ReadyState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Connected,
            2 => Self::Connecting,
            3 => Self::Disconnecting,
            _ => Self::Disconnected,
        }
    }
}

/// Cloneable handle to the shared database connection.
///
/// Clones share the underlying client; concurrency safety of simultaneous
/// document operations is delegated to the driver.
#[derive(Clone)]
pub struct Handle {
    database: Database,
    state: Arc<AtomicU8>,
}

impl Handle {
    /// Current readiness value.
    pub fn ready_state(&self) -> ReadyState {
        ReadyState::from_u8(self.state.load(Ordering::Relaxed))
    }

    /// The deployment's default database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// A collection of raw BSON documents.
    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

/// Connect to MongoDB and verify the connection with a `ping`.
///
/// The driver connects lazily; the ping forces server selection so startup
/// can fail fast when the database is unreachable.
pub async fn connect(uri: &str) -> crate::Result<Handle> {
    let state = Arc::new(AtomicU8::new(ReadyState::Connecting as u8));

    let client = Client::with_uri_str(uri).await?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    state.store(ReadyState::Connected as u8, Ordering::Relaxed);

    Ok(Handle { database, state })
}
