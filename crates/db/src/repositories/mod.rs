//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! the request's `&mut dyn StoreSession` as the first argument. Every method
//! performs exactly one store operation.

pub mod basket_repo;
pub mod catalog_repo;
pub mod product_repo;

pub use basket_repo::BasketRepo;
pub use catalog_repo::CatalogRepo;
pub use product_repo::ProductRepo;
