//! Domain logic for the robot store.
//!
//! Everything in this crate is pure: identifier parsing, the error taxonomy,
//! the fixed catalog enumerations and the product schema validator. Storage
//! lives in `robot_store_db`, HTTP in `robot_store_api`.

pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;
