//! Student records.

use crate::module::Module;
use crate::router::Router;

use super::crud;

const COLLECTION: &str = "students";

pub struct Students;

impl Module for Students {
    fn name(&self) -> &'static str {
        "students"
    }

    fn routes(&self, router: &mut Router) {
        router.get("/api/students", |ctx| crud::list(ctx, COLLECTION));
        router.post("/api/students", |ctx| crud::create(ctx, COLLECTION));
        router.get("/api/students/{id}", |ctx| crud::get(ctx, COLLECTION));
        router.put("/api/students/{id}", |ctx| crud::update(ctx, COLLECTION));
        router.delete("/api/students/{id}", |ctx| crud::delete(ctx, COLLECTION));
    }
}
