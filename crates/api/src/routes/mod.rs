pub mod health;

use axum::routing::{get, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                 list (?category, ?character), create
/// /products/{id}            get, replace (PUT), delete
///
/// /categories               list
/// /characters               list
///
/// /basket/{user_id}         get by owner
///
/// /clearWaste               strip obsolete product fields (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Products
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        // Catalog lookups
        .route("/categories", get(handlers::catalog::list_categories))
        .route("/characters", get(handlers::catalog::list_characters))
        // Baskets
        .route("/basket/{user_id}", get(handlers::basket::get_basket))
        // Maintenance
        .route("/clearWaste", put(handlers::maintenance::clear_waste))
}
