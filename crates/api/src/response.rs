//! The response envelope shared by every API endpoint.
//!
//! Success and failure alike serialize as
//! `{ "status": <code>, "message": <text>, "data": <payload or null> }`,
//! where `status` always equals the HTTP status line. Build responses with
//! [`Envelope`] instead of ad-hoc `json!` so the two can never disagree.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Serialize, Serializer};

/// Message returned for every backend failure. The real cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error (none of your business)";

/// Standard `{ status, message, data }` response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// 200 with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// 200 with `data: null`.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
            data: None,
        }
    }

    /// A failure envelope. `data` is always null.
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }

    /// The sanitized 500 envelope.
    pub fn internal_error() -> Self {
        Self::failure(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}
