//! Product models and DTOs.

use robot_store_core::types::{DocId, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::store::StoreError;

/// A full product document, returned as stored.
///
/// Only `id` is interpreted. The body passes through untouched, so legacy
/// documents with missing schema fields or extra keys (e.g. `stock`) come
/// back exactly as they sit in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: DocId,
    #[serde(flatten)]
    pub fields: Document,
}

/// The listing projection: `{id, title, price, image}`.
///
/// Each projected field may be absent on legacy documents; absent fields are
/// omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: DocId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductSummary {
    /// Fields fetched for the listing projection (the id always comes along).
    pub const PROJECTION: &'static [&'static str] = &["title", "price", "image"];
}

/// DTO for creating or fully replacing a product.
///
/// Built only after the payload passed `validate_product`. Every field is
/// serialized, absent optional ones as null, so an update replaces all ten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub title: String,
    pub price: Number,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image2: Option<String>,
    #[serde(default)]
    pub image3: Option<String>,
    pub category_id: i64,
    pub category: String,
    pub character_id: i64,
    pub character: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProductInput {
    /// The document written to the `products` collection.
    pub fn to_document(&self) -> Result<Document, StoreError> {
        match serde_json::to_value(self)? {
            Value::Object(doc) => Ok(doc),
            other => Err(StoreError::Malformed(serde::ser::Error::custom(format!(
                "expected a JSON object, got {other}"
            )))),
        }
    }
}
