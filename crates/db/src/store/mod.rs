//! Document store client.
//!
//! [`DocumentStore`] hands out one [`StoreSession`] per request. A session
//! exposes collection-scoped find / insert / update / delete operations that
//! return documents or counts of affected documents. Dropping the session
//! releases whatever it holds (a pooled connection for PostgreSQL).
//!
//! Two backends implement the traits:
//! - [`postgres::PgStore`] -- one JSONB table per collection.
//! - [`memory::MemoryStore`] -- in-process collections, for tests and demos.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use robot_store_core::types::{DocId, Document};
use serde_json::Value;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Failures raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document could not be mapped onto its model.
    #[error("Malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// The collections the robot store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Categories,
    Characters,
    Baskets,
}

impl Collection {
    /// Backing table / collection name. Always a fixed identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Categories => "categories",
            Collection::Characters => "characters",
            Collection::Baskets => "baskets",
        }
    }
}

/// A document together with its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocId,
    pub doc: Document,
}

/// Equality filter: an optional identifier plus top-level field matches,
/// combined with AND. The empty filter matches every document.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    id: Option<DocId>,
    fields: Document,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: DocId) -> Self {
        Self {
            id: Some(id),
            fields: Document::new(),
        }
    }

    /// Add an equality condition on a top-level field.
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    pub fn id(&self) -> Option<DocId> {
        self.id
    }

    pub fn fields(&self) -> &Document {
        &self.fields
    }

    pub fn matches(&self, stored: &StoredDocument) -> bool {
        self.id.map_or(true, |id| id == stored.id)
            && self
                .fields
                .iter()
                .all(|(k, v)| stored.doc.get(k) == Some(v))
    }
}

/// Keep only the projected top-level fields of a document.
pub fn project(doc: Document, fields: &[&str]) -> Document {
    doc.into_iter()
        .filter(|(k, _)| fields.contains(&k.as_str()))
        .collect()
}

/// Source of per-request sessions.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Acquire a session scoped to one request.
    async fn session(&self) -> Result<Box<dyn StoreSession>, StoreError>;

    /// Cheap reachability probe for `/health`.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// Collection-scoped operations available during one request.
#[async_trait]
pub trait StoreSession: Send {
    /// All documents matching `filter`, in insertion order, optionally
    /// reduced to the `projection` fields.
    async fn find(
        &mut self,
        collection: Collection,
        filter: &Filter,
        projection: Option<&[&str]>,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    async fn find_one(
        &mut self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<StoredDocument>, StoreError>;

    /// Insert a document under a freshly generated identifier.
    async fn insert_one(
        &mut self,
        collection: Collection,
        doc: Document,
    ) -> Result<DocId, StoreError>;

    /// Overwrite the `set` fields on the first matching document.
    ///
    /// Returns the number of documents that actually changed (0 or 1).
    async fn update_one(
        &mut self,
        collection: Collection,
        filter: &Filter,
        set: Document,
    ) -> Result<u64, StoreError>;

    /// Remove `fields` from every matching document.
    ///
    /// Returns the number of documents that lost at least one field.
    async fn unset_many(
        &mut self,
        collection: Collection,
        filter: &Filter,
        fields: &[&str],
    ) -> Result<u64, StoreError>;

    /// Delete the first matching document. Returns 0 or 1.
    async fn delete_one(&mut self, collection: Collection, filter: &Filter)
        -> Result<u64, StoreError>;
}
