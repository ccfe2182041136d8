//! Module trait for pluggable entity route modules.
//!
//! Each entity (students, schools, precontracts, contracts, email) lives
//! behind this trait: the shell only sees a name and a set of routes.
//!
//! # Example
//!
//! ```ignore
//! use fiches::{Module, Router};
//!
//! pub struct Students;
//!
//! impl Module for Students {
//!     fn name(&self) -> &'static str {
//!         "students"
//!     }
//!
//!     fn routes(&self, router: &mut Router) {
//!         router.get("/api/students", |_ctx| async move {
//!             fiches::response::ok(&serde_json::json!([]))
//!         });
//!     }
//! }
//! ```

use crate::router::Router;

/// A pluggable entity route module.
///
/// Modules register their routes with the router and can hold their own
/// state, captured in closures using `Arc` or similar.
pub trait Module: Send + Sync {
    /// Module name for identification and logging.
    fn name(&self) -> &'static str;

    /// Register routes with the router.
    fn routes(&self, router: &mut Router);
}
