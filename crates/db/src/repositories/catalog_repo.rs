//! Repository for the read-only `categories` and `characters` collections.

use crate::models::catalog::{Category, Character, NAME_PROJECTION};
use crate::models::decode;
use crate::store::{Collection, Filter, StoreError, StoreSession};

/// Provides read access to the catalog lookups.
pub struct CatalogRepo;

impl CatalogRepo {
    pub async fn list_categories(
        session: &mut dyn StoreSession,
    ) -> Result<Vec<Category>, StoreError> {
        session
            .find(Collection::Categories, &Filter::all(), Some(NAME_PROJECTION))
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn list_characters(
        session: &mut dyn StoreSession,
    ) -> Result<Vec<Character>, StoreError> {
        session
            .find(Collection::Characters, &Filter::all(), Some(NAME_PROJECTION))
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }
}
