//! Precontract records.
//!
//! The by-id handlers are exported so the shell can keep the legacy
//! `/api/precontrat/{id}` spelling pointing at the very same functions.

use crate::error::Result;
use crate::module::Module;
use crate::response::HttpResponse;
use crate::router::{Context, Router};

use super::crud;

const COLLECTION: &str = "precontracts";

/// Fetch one precontract by id (also mounted under the legacy alias).
pub async fn get_by_id(ctx: Context) -> Result<HttpResponse> {
    crud::get(ctx, COLLECTION).await
}

/// Update one precontract by id (also mounted under the legacy alias).
pub async fn update_by_id(ctx: Context) -> Result<HttpResponse> {
    crud::update(ctx, COLLECTION).await
}

pub struct Precontracts;

impl Module for Precontracts {
    fn name(&self) -> &'static str {
        "precontracts"
    }

    fn routes(&self, router: &mut Router) {
        router.get("/api/precontracts", |ctx| crud::list(ctx, COLLECTION));
        router.post("/api/precontracts", |ctx| crud::create(ctx, COLLECTION));
        router.get("/api/precontracts/{id}", get_by_id);
        router.put("/api/precontracts/{id}", update_by_id);
        router.delete("/api/precontracts/{id}", |ctx| {
            crud::delete(ctx, COLLECTION)
        });
    }
}
