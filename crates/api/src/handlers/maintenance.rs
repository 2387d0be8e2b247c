//! Maintenance endpoints.

use axum::response::IntoResponse;
use robot_store_core::error::CoreError;
use robot_store_db::repositories::product_repo::WASTE_FIELDS;
use robot_store_db::repositories::ProductRepo;

use crate::error::AppResult;
use crate::middleware::session::Session;
use crate::response::Envelope;

/// PUT /api/clearWaste
///
/// Strips the obsolete `category_id` and `character_id` fields from every
/// product. A run that changes nothing (already clean, or no products)
/// is reported as a 400.
pub async fn clear_waste(mut session: Session) -> AppResult<impl IntoResponse> {
    let modified = ProductRepo::clear_waste(&mut *session).await?;
    if modified == 0 {
        return Err(CoreError::Unchanged("No products were modified".into()).into());
    }

    tracing::info!(modified, fields = ?WASTE_FIELDS, "Cleared waste fields from products");

    Ok(Envelope::empty("Successfully cleared waste fields from products"))
}
