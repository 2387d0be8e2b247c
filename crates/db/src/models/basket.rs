//! Basket model.

use robot_store_core::types::{DocId, Document};
use serde::{Deserialize, Serialize};

/// A user's basket, returned as stored.
///
/// Only `id` and `user_id` are interpreted; everything else in the document
/// (line items, totals, whatever the writer put there) passes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    pub id: DocId,
    pub user_id: DocId,
    #[serde(flatten)]
    pub contents: Document,
}
