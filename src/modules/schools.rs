//! School records.

use crate::module::Module;
use crate::router::Router;

use super::crud;

const COLLECTION: &str = "schools";

pub struct Schools;

impl Module for Schools {
    fn name(&self) -> &'static str {
        "schools"
    }

    fn routes(&self, router: &mut Router) {
        router.get("/api/schools", |ctx| crud::list(ctx, COLLECTION));
        router.post("/api/schools", |ctx| crud::create(ctx, COLLECTION));
        router.get("/api/schools/{id}", |ctx| crud::get(ctx, COLLECTION));
        router.put("/api/schools/{id}", |ctx| crud::update(ctx, COLLECTION));
        router.delete("/api/schools/{id}", |ctx| crud::delete(ctx, COLLECTION));
    }
}
