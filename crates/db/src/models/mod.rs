//! Collection models.
//!
//! Each submodule contains the `Serialize` view returned to clients and,
//! where the API writes the collection, the `Deserialize` input DTO.

pub mod basket;
pub mod catalog;
pub mod product;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::store::{StoreError, StoredDocument};

/// Map a stored document onto a model, exposing its identifier as `id`.
pub fn decode<T: DeserializeOwned>(stored: StoredDocument) -> Result<T, StoreError> {
    let StoredDocument { id, mut doc } = stored;
    doc.insert("id".into(), Value::String(id.to_string()));
    Ok(serde_json::from_value(Value::Object(doc))?)
}
