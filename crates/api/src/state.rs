use std::sync::Arc;

use robot_store_db::store::DocumentStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Document store backend handing out per-request sessions.
    pub store: Arc<dyn DocumentStore>,
}
