//! Repository for the read-only `baskets` collection.

use robot_store_core::types::DocId;

use crate::models::basket::Basket;
use crate::models::decode;
use crate::store::{Collection, Filter, StoreError, StoreSession};

/// Provides read access to user baskets.
pub struct BasketRepo;

impl BasketRepo {
    /// Find the basket owned by `user_id`.
    ///
    /// Returns `None` if the user has no basket.
    pub async fn find_by_user(
        session: &mut dyn StoreSession,
        user_id: DocId,
    ) -> Result<Option<Basket>, StoreError> {
        let filter = Filter::all().eq("user_id", user_id.to_string());
        session
            .find_one(Collection::Baskets, &filter)
            .await?
            .map(decode)
            .transpose()
    }
}
