//! Request validation.
//!
//! A schema is a static table of [`rules::FieldRule`]s; the evaluator runs
//! every rule against a JSON record and collects the violations in order.

pub mod evaluator;
pub mod product;
pub mod rules;

pub use evaluator::evaluate_rules;
pub use product::{validate_product, PRODUCT_FIELDS, PRODUCT_RULES};
pub use rules::{FieldRule, FieldViolation, RuleKind, ValidationResult};
