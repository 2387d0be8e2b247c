//! Repository for the `products` collection.

use robot_store_core::types::DocId;

use crate::models::decode;
use crate::models::product::{Product, ProductInput, ProductSummary};
use crate::store::{Collection, Filter, StoreError, StoreSession};

/// Fields the maintenance sweep strips from every product.
pub const WASTE_FIELDS: &[&str] = &["category_id", "character_id"];

/// Provides data access for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List products as summaries, filtered by the AND of the given names.
    ///
    /// Documents whose projected fields have the wrong type are logged and
    /// left out rather than failing the whole listing.
    pub async fn list(
        session: &mut dyn StoreSession,
        category: Option<&str>,
        character: Option<&str>,
    ) -> Result<Vec<ProductSummary>, StoreError> {
        let mut filter = Filter::all();
        if let Some(category) = category {
            filter = filter.eq("category", category);
        }
        if let Some(character) = character {
            filter = filter.eq("character", character);
        }

        let summaries: Vec<ProductSummary> = session
            .find(Collection::Products, &filter, Some(ProductSummary::PROJECTION))
            .await?
            .into_iter()
            .filter_map(|stored| {
                let id = stored.id;
                decode(stored)
                    .map_err(|err| {
                        tracing::warn!(product_id = %id, error = %err, "Skipping undecodable product");
                    })
                    .ok()
            })
            .collect();

        Ok(summaries)
    }

    /// All products with the given id (zero or one).
    pub async fn find_by_id(
        session: &mut dyn StoreSession,
        id: DocId,
    ) -> Result<Vec<Product>, StoreError> {
        session
            .find(Collection::Products, &Filter::by_id(id), None)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Insert a new product and return its generated id.
    pub async fn create(
        session: &mut dyn StoreSession,
        input: &ProductInput,
    ) -> Result<DocId, StoreError> {
        session
            .insert_one(Collection::Products, input.to_document()?)
            .await
    }

    /// Replace the ten product fields. Returns the number of documents changed.
    pub async fn update(
        session: &mut dyn StoreSession,
        id: DocId,
        input: &ProductInput,
    ) -> Result<u64, StoreError> {
        session
            .update_one(Collection::Products, &Filter::by_id(id), input.to_document()?)
            .await
    }

    /// Delete a product. Returns the number of documents removed.
    pub async fn delete(session: &mut dyn StoreSession, id: DocId) -> Result<u64, StoreError> {
        session
            .delete_one(Collection::Products, &Filter::by_id(id))
            .await
    }

    /// Unset [`WASTE_FIELDS`] on every product. Returns the number changed.
    pub async fn clear_waste(session: &mut dyn StoreSession) -> Result<u64, StoreError> {
        session
            .unset_many(Collection::Products, &Filter::all(), WASTE_FIELDS)
            .await
    }
}
