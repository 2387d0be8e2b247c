//! Product schema.

use super::evaluator::evaluate_rules;
use super::rules::{FieldRule, RuleKind, ValidationResult};
use crate::catalog::{CATALOG_ID_RANGE, CATEGORY_NAMES, CHARACTER_NAMES};
use crate::types::Document;

/// Fields a product document carries, in schema order.
pub const PRODUCT_FIELDS: [&str; 10] = [
    "title",
    "price",
    "image",
    "image2",
    "image3",
    "category_id",
    "category",
    "character_id",
    "character",
    "description",
];

const ID_MIN: f64 = *CATALOG_ID_RANGE.start() as f64;
const ID_MAX: f64 = *CATALOG_ID_RANGE.end() as f64;

pub const PRODUCT_RULES: &[FieldRule] = &[
    FieldRule::new("title", RuleKind::Required, "title is required"),
    FieldRule::new("title", RuleKind::String, "title must be a string"),
    FieldRule::new(
        "title",
        RuleKind::LengthBetween { min: 5, max: 255 },
        "title length must be between 5 and 255 characters",
    ),
    FieldRule::new("price", RuleKind::Required, "price is required"),
    FieldRule::new("price", RuleKind::Number, "price must be a number"),
    FieldRule::new(
        "price",
        RuleKind::AtLeast { min: 0.0 },
        "price must not be negative",
    ),
    FieldRule::new("image", RuleKind::String, "image must be a string"),
    FieldRule::new("image2", RuleKind::String, "image2 must be a string"),
    FieldRule::new("image3", RuleKind::String, "image3 must be a string"),
    FieldRule::new("category_id", RuleKind::Required, "category_id is required"),
    FieldRule::new(
        "category_id",
        RuleKind::Integer,
        "category_id must be an integer",
    ),
    FieldRule::new(
        "category_id",
        RuleKind::Between {
            min: ID_MIN,
            max: ID_MAX,
        },
        "category_id must be between 1 and 4",
    ),
    FieldRule::new("category", RuleKind::Required, "category is required"),
    FieldRule::new(
        "category",
        RuleKind::OneOf {
            values: CATEGORY_NAMES,
        },
        "category must be one of: Aprons, Baseball Hats, Mugs, T-shirts",
    ),
    FieldRule::new(
        "character_id",
        RuleKind::Required,
        "character_id is required",
    ),
    FieldRule::new(
        "character_id",
        RuleKind::Integer,
        "character_id must be an integer",
    ),
    FieldRule::new(
        "character_id",
        RuleKind::Between {
            min: ID_MIN,
            max: ID_MAX,
        },
        "character_id must be between 1 and 4",
    ),
    FieldRule::new("character", RuleKind::Required, "character is required"),
    FieldRule::new(
        "character",
        RuleKind::OneOf {
            values: CHARACTER_NAMES,
        },
        "character must be one of: Fred, Dolores, Bubbles, Rex, Harold",
    ),
    FieldRule::new(
        "description",
        RuleKind::String,
        "description must be a string",
    ),
];

/// Validate a candidate product record against [`PRODUCT_RULES`].
pub fn validate_product(data: &Document) -> ValidationResult {
    evaluate_rules(PRODUCT_RULES, data)
}
