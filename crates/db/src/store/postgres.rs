//! PostgreSQL backend: one `(id UUID, doc JSONB)` table per collection.
//!
//! Field filters are expressed as JSONB containment (`doc @> $filter`), which
//! is equality for the scalar values the API filters on.

use async_trait::async_trait;
use robot_store_core::types::{new_doc_id, DocId, Document};
use sqlx::pool::PoolConnection;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres};

use super::{project, Collection, DocumentStore, Filter, StoreError, StoreSession, StoredDocument};

/// Shared match clause. `$1` is the optional id, `$2` the containment filter.
const MATCH: &str = "($1::uuid IS NULL OR id = $1) AND doc @> $2::jsonb";

/// Document store backed by a sqlx connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn session(&self) -> Result<Box<dyn StoreSession>, StoreError> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(PgSession { conn }))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

/// A pooled connection held for the duration of one request.
pub struct PgSession {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl StoreSession for PgSession {
    async fn find(
        &mut self,
        collection: Collection,
        filter: &Filter,
        projection: Option<&[&str]>,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let query = format!(
            "SELECT id, doc FROM {} WHERE {MATCH} ORDER BY id",
            collection.name()
        );
        let rows = sqlx::query_as::<_, (DocId, Json<Document>)>(&query)
            .bind(filter.id())
            .bind(Json(filter.fields()))
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(doc))| StoredDocument {
                id,
                doc: match projection {
                    Some(fields) => project(doc, fields),
                    None => doc,
                },
            })
            .collect())
    }

    async fn find_one(
        &mut self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<StoredDocument>, StoreError> {
        let query = format!(
            "SELECT id, doc FROM {} WHERE {MATCH} ORDER BY id LIMIT 1",
            collection.name()
        );
        let row = sqlx::query_as::<_, (DocId, Json<Document>)>(&query)
            .bind(filter.id())
            .bind(Json(filter.fields()))
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.map(|(id, Json(doc))| StoredDocument { id, doc }))
    }

    async fn insert_one(
        &mut self,
        collection: Collection,
        doc: Document,
    ) -> Result<DocId, StoreError> {
        let id = new_doc_id();
        let query = format!(
            "INSERT INTO {} (id, doc) VALUES ($1, $2::jsonb)",
            collection.name()
        );
        sqlx::query(&query)
            .bind(id)
            .bind(Json(&doc))
            .execute(&mut *self.conn)
            .await?;
        Ok(id)
    }

    async fn update_one(
        &mut self,
        collection: Collection,
        filter: &Filter,
        set: Document,
    ) -> Result<u64, StoreError> {
        let table = collection.name();
        // The IS DISTINCT FROM guard makes rows_affected count real changes only.
        let query = format!(
            "UPDATE {table} SET doc = doc || $3::jsonb \
             WHERE id = (SELECT id FROM {table} WHERE {MATCH} ORDER BY id LIMIT 1) \
               AND doc IS DISTINCT FROM doc || $3::jsonb"
        );
        let result = sqlx::query(&query)
            .bind(filter.id())
            .bind(Json(filter.fields()))
            .bind(Json(&set))
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn unset_many(
        &mut self,
        collection: Collection,
        filter: &Filter,
        fields: &[&str],
    ) -> Result<u64, StoreError> {
        let query = format!(
            "UPDATE {} SET doc = doc - $3::text[] \
             WHERE {MATCH} AND doc ?| $3::text[]",
            collection.name()
        );
        let result = sqlx::query(&query)
            .bind(filter.id())
            .bind(Json(filter.fields()))
            .bind(fields)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_one(
        &mut self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<u64, StoreError> {
        let table = collection.name();
        let query = format!(
            "DELETE FROM {table} \
             WHERE id = (SELECT id FROM {table} WHERE {MATCH} ORDER BY id LIMIT 1)"
        );
        let result = sqlx::query(&query)
            .bind(filter.id())
            .bind(Json(filter.fields()))
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected())
    }
}
