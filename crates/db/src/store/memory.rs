//! In-process backend with the same semantics as [`super::PgStore`].
//!
//! Collections live behind a `tokio::sync::RwLock`; sessions are cheap
//! handles onto the shared state. The store can be switched offline to
//! exercise the unavailable-backend path, and it counts every executed
//! operation so callers can assert that nothing touched it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use robot_store_core::catalog::{Category, Character};
use robot_store_core::types::{new_doc_id, DocId, Document};
use serde_json::Value;
use tokio::sync::RwLock;

use super::{project, Collection, DocumentStore, Filter, StoreError, StoreSession, StoredDocument};

type Collections = HashMap<Collection, Vec<StoredDocument>>;

#[derive(Debug)]
struct Inner {
    collections: RwLock<Collections>,
    available: AtomicBool,
    operations: AtomicUsize,
}

/// In-memory document store. Clones share the same data.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_collections(Collections::new())
    }
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with the category and character lookups populated.
    pub fn seeded() -> Self {
        let named = |names: Vec<&'static str>| -> Vec<StoredDocument> {
            names
                .into_iter()
                .map(|name| {
                    let mut doc = Document::new();
                    doc.insert("name".into(), Value::from(name));
                    StoredDocument {
                        id: new_doc_id(),
                        doc,
                    }
                })
                .collect()
        };

        let mut collections = Collections::new();
        collections.insert(
            Collection::Categories,
            named(Category::ALL.iter().map(|c| c.name()).collect()),
        );
        collections.insert(
            Collection::Characters,
            named(Character::ALL.iter().map(|c| c.name()).collect()),
        );
        Self::with_collections(collections)
    }

    fn with_collections(collections: Collections) -> Self {
        Self {
            inner: Arc::new(Inner {
                collections: RwLock::new(collections),
                available: AtomicBool::new(true),
                operations: AtomicUsize::new(0),
            }),
        }
    }

    /// Take the store offline (or back online). Offline stores refuse sessions.
    pub fn set_available(&self, available: bool) {
        self.inner.available.store(available, Ordering::SeqCst);
    }

    /// Number of collection operations executed so far.
    pub fn operation_count(&self) -> usize {
        self.inner.operations.load(Ordering::SeqCst)
    }

    /// Insert a document under a known identifier, bypassing the counter.
    pub async fn put(&self, collection: Collection, id: DocId, doc: Document) {
        let mut collections = self.inner.collections.write().await;
        collections
            .entry(collection)
            .or_default()
            .push(StoredDocument { id, doc });
    }

    /// Snapshot of a collection, bypassing the counter.
    pub async fn documents(&self, collection: Collection) -> Vec<StoredDocument> {
        let collections = self.inner.collections.read().await;
        collections.get(&collection).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn session(&self) -> Result<Box<dyn StoreSession>, StoreError> {
        if !self.inner.available.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".into()));
        }
        Ok(Box::new(MemorySession {
            inner: Arc::clone(&self.inner),
        }))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        if self.inner.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory store is offline".into()))
        }
    }
}

/// Handle onto the shared collections for one request.
pub struct MemorySession {
    inner: Arc<Inner>,
}

impl MemorySession {
    fn count(&self) {
        self.inner.operations.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoreSession for MemorySession {
    async fn find(
        &mut self,
        collection: Collection,
        filter: &Filter,
        projection: Option<&[&str]>,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        self.count();
        let collections = self.inner.collections.read().await;
        let docs = collections.get(&collection).map(Vec::as_slice).unwrap_or(&[]);

        Ok(docs
            .iter()
            .filter(|stored| filter.matches(stored))
            .map(|stored| StoredDocument {
                id: stored.id,
                doc: match projection {
                    Some(fields) => project(stored.doc.clone(), fields),
                    None => stored.doc.clone(),
                },
            })
            .collect())
    }

    async fn find_one(
        &mut self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<StoredDocument>, StoreError> {
        self.count();
        let collections = self.inner.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|stored| filter.matches(stored)))
            .cloned())
    }

    async fn insert_one(
        &mut self,
        collection: Collection,
        doc: Document,
    ) -> Result<DocId, StoreError> {
        self.count();
        let id = new_doc_id();
        let mut collections = self.inner.collections.write().await;
        collections
            .entry(collection)
            .or_default()
            .push(StoredDocument { id, doc });
        Ok(id)
    }

    async fn update_one(
        &mut self,
        collection: Collection,
        filter: &Filter,
        set: Document,
    ) -> Result<u64, StoreError> {
        self.count();
        let mut collections = self.inner.collections.write().await;
        let Some(stored) = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|stored| filter.matches(stored)))
        else {
            return Ok(0);
        };

        let mut merged = stored.doc.clone();
        merged.extend(set);
        if merged == stored.doc {
            return Ok(0);
        }
        stored.doc = merged;
        Ok(1)
    }

    async fn unset_many(
        &mut self,
        collection: Collection,
        filter: &Filter,
        fields: &[&str],
    ) -> Result<u64, StoreError> {
        self.count();
        let mut collections = self.inner.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(0);
        };

        let mut modified = 0;
        for stored in docs.iter_mut().filter(|stored| filter.matches(stored)) {
            let before = stored.doc.len();
            stored.doc.retain(|k, _| !fields.contains(&k.as_str()));
            if stored.doc.len() != before {
                modified += 1;
            }
        }
        Ok(modified)
    }

    async fn delete_one(
        &mut self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<u64, StoreError> {
        self.count();
        let mut collections = self.inner.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(0);
        };
        match docs.iter().position(|stored| filter.matches(stored)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
