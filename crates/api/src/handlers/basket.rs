use axum::response::IntoResponse;
use robot_store_core::error::CoreError;
use robot_store_db::repositories::BasketRepo;

use crate::error::AppResult;
use crate::middleware::params::IdPath;
use crate::middleware::session::Session;
use crate::response::Envelope;

/// GET /api/basket/{user_id}
///
/// Returns the user's basket document as stored.
pub async fn get_basket(
    IdPath(user_id): IdPath,
    mut session: Session,
) -> AppResult<impl IntoResponse> {
    let basket = BasketRepo::find_by_user(&mut *session, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Basket",
            id: user_id,
        })?;

    Ok(Envelope::ok("Successfully retrieved basket", basket))
}
