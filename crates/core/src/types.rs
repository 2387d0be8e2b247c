use crate::error::CoreError;

/// Identifier of a stored document. Generated as a time-ordered UUID (v7).
pub type DocId = uuid::Uuid;

/// A schemaless document body, as stored in a collection.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Generate a fresh document identifier.
pub fn new_doc_id() -> DocId {
    uuid::Uuid::now_v7()
}

/// Parse a client-supplied identifier.
///
/// Accepts the standard UUID text forms. Anything else is rejected so the
/// caller can fail before touching the store.
pub fn parse_doc_id(raw: &str) -> Result<DocId, CoreError> {
    uuid::Uuid::try_parse(raw).map_err(|_| CoreError::InvalidId(raw.to_string()))
}
