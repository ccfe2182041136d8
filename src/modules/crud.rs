//! Shared CRUD handlers over one MongoDB collection.
//!
//! Entity modules delegate here. Documents pass through as-is: schema and
//! validation live with the frontend forms, not in this backend.

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::options::ReturnDocument;

use crate::error::{Error, Result};
use crate::response::{self, HttpResponse};
use crate::router::Context;

fn object_id(ctx: &Context) -> Result<ObjectId> {
    let id = ctx.require_param("id")?;
    ObjectId::parse_str(id).map_err(|_| Error::BadRequest(format!("Invalid id: {id}")))
}

fn body_document(ctx: &Context) -> Result<Document> {
    let value: serde_json::Value = ctx.json()?;
    mongodb::bson::to_document(&value)
        .map_err(|e| Error::BadRequest(format!("Invalid document: {e}")))
}

pub(super) async fn list(ctx: Context, collection: &'static str) -> Result<HttpResponse> {
    let db = ctx.require_db()?;
    let documents: Vec<Document> = db
        .collection(collection)
        .find(doc! {})
        .await?
        .try_collect()
        .await?;

    response::ok(&documents)
}

pub(super) async fn get(ctx: Context, collection: &'static str) -> Result<HttpResponse> {
    let id = object_id(&ctx)?;
    let db = ctx.require_db()?;

    match db.collection(collection).find_one(doc! { "_id": id }).await? {
        Some(document) => response::ok(&document),
        None => Err(Error::NotFound(format!("{collection}/{id}"))),
    }
}

pub(super) async fn create(ctx: Context, collection: &'static str) -> Result<HttpResponse> {
    let document = body_document(&ctx)?;
    let db = ctx.require_db()?;

    let inserted = db.collection(collection).insert_one(document).await?;
    response::created(&serde_json::json!({ "_id": inserted.inserted_id }))
}

pub(super) async fn update(ctx: Context, collection: &'static str) -> Result<HttpResponse> {
    let id = object_id(&ctx)?;
    let document = body_document(&ctx)?;
    let db = ctx.require_db()?;

    let updated = db
        .collection(collection)
        .find_one_and_update(doc! { "_id": id }, doc! { "$set": document })
        .return_document(ReturnDocument::After)
        .await?;

    match updated {
        Some(document) => response::ok(&document),
        None => Err(Error::NotFound(format!("{collection}/{id}"))),
    }
}

pub(super) async fn delete(ctx: Context, collection: &'static str) -> Result<HttpResponse> {
    let id = object_id(&ctx)?;
    let db = ctx.require_db()?;

    let result = db
        .collection(collection)
        .delete_one(doc! { "_id": id })
        .await?;
    if result.deleted_count == 0 {
        return Err(Error::NotFound(format!("{collection}/{id}")));
    }

    Ok(response::no_content())
}
