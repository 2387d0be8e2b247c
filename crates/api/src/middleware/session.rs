//! Per-request store session extractor.

use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use robot_store_db::store::StoreSession;

use crate::error::AppError;
use crate::state::AppState;

/// A document store session owned by one handler invocation.
///
/// Acquired from [`AppState::store`] before the handler runs. If the store
/// is unreachable the request fails with a 500 envelope. The session is
/// released when the handler returns, on every exit path.
///
/// ```ignore
/// async fn my_handler(mut session: Session) -> AppResult<impl IntoResponse> {
///     let items = ProductRepo::list(&mut *session, None, None).await?;
///     Ok(Envelope::ok("Successfully retrieved products", items))
/// }
/// ```
pub struct Session(Box<dyn StoreSession>);

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.store.session().await?;
        Ok(Session(session))
    }
}

impl Deref for Session {
    type Target = dyn StoreSession;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
    }
}
