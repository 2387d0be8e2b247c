//! Handlers for the read-only catalog lookups.

use axum::response::IntoResponse;
use robot_store_db::repositories::CatalogRepo;

use crate::error::AppResult;
use crate::middleware::session::Session;
use crate::response::Envelope;

/// GET /api/categories
pub async fn list_categories(mut session: Session) -> AppResult<impl IntoResponse> {
    let categories = CatalogRepo::list_categories(&mut *session).await?;

    Ok(Envelope::ok("Successfully retrieved categories", categories))
}

/// GET /api/characters
pub async fn list_characters(mut session: Session) -> AppResult<impl IntoResponse> {
    let characters = CatalogRepo::list_characters(&mut *session).await?;

    Ok(Envelope::ok("Successfully retrieved characters", characters))
}
