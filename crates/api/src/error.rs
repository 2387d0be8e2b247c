use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use robot_store_core::error::CoreError;
use robot_store_db::store::StoreError;

use crate::response::Envelope;

/// Message for request bodies that are not a JSON object.
pub const INVALID_BODY_MESSAGE: &str = "Request body must be a JSON object";

/// Message for query strings that do not deserialize.
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query string";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for backend
/// failures. Implements [`IntoResponse`] to produce failure envelopes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `robot_store_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A document store failure. Always a 500.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let envelope = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => Envelope::failure(StatusCode::BAD_REQUEST, msg),
                CoreError::InvalidId(_) => Envelope::failure(StatusCode::BAD_REQUEST, "Invalid ID"),
                CoreError::NotFound { entity, .. } => {
                    Envelope::failure(StatusCode::BAD_REQUEST, format!("{entity} not found"))
                }
                // Zero-effect mutations stay client errors for compatibility.
                CoreError::Unchanged(msg) => Envelope::failure(StatusCode::BAD_REQUEST, msg),
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Document store error");
                Envelope::internal_error()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => Envelope::failure(StatusCode::BAD_REQUEST, msg),
        };

        envelope.into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AppError::BadRequest(INVALID_BODY_MESSAGE.into())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected query string");
        AppError::BadRequest(INVALID_QUERY_MESSAGE.into())
    }
}
