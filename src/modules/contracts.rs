//! Contract records.

use crate::module::Module;
use crate::router::Router;

use super::crud;

const COLLECTION: &str = "contracts";

pub struct Contracts;

impl Module for Contracts {
    fn name(&self) -> &'static str {
        "contracts"
    }

    fn routes(&self, router: &mut Router) {
        router.get("/api/contracts", |ctx| crud::list(ctx, COLLECTION));
        router.post("/api/contracts", |ctx| crud::create(ctx, COLLECTION));
        router.get("/api/contracts/{id}", |ctx| crud::get(ctx, COLLECTION));
        router.put("/api/contracts/{id}", |ctx| crud::update(ctx, COLLECTION));
        router.delete("/api/contracts/{id}", |ctx| crud::delete(ctx, COLLECTION));
    }
}
