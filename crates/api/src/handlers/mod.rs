pub mod basket;
pub mod catalog;
pub mod maintenance;
pub mod products;
