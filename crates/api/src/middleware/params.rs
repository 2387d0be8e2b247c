//! Parameter extractors with envelope rejections.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use robot_store_core::error::CoreError;
use robot_store_core::types::{parse_doc_id, DocId};

use crate::error::AppError;

/// A document identifier taken from the single path parameter.
///
/// Place it before [`super::session::Session`] in a handler's arguments: a
/// malformed identifier then rejects with 400 `Invalid ID` before any store
/// session is acquired.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DocId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CoreError::InvalidId(rejection.body_text()))?;

        Ok(IdPath(parse_doc_id(&raw)?))
    }
}

/// `axum::Json` whose rejection is a 400 envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Query` whose rejection is a 400 envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
