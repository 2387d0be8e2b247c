//! Fixed catalog enumerations.
//!
//! Category and character names are closed sets. The numeric `category_id`
//! and `character_id` fields share one range and are not tied to a name.

use std::ops::RangeInclusive;

pub const CATEGORY_NAMES: &[&str] = &["Aprons", "Baseball Hats", "Mugs", "T-shirts"];

pub const CHARACTER_NAMES: &[&str] = &["Fred", "Dolores", "Bubbles", "Rex", "Harold"];

/// Valid range for both `category_id` and `character_id`.
pub const CATALOG_ID_RANGE: RangeInclusive<i64> = 1..=4;

/// Product category, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Aprons,
    BaseballHats,
    Mugs,
    TShirts,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Aprons,
        Category::BaseballHats,
        Category::Mugs,
        Category::TShirts,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Category::Aprons => "Aprons",
            Category::BaseballHats => "Baseball Hats",
            Category::Mugs => "Mugs",
            Category::TShirts => "T-shirts",
        }
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Robot character, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Character {
    Fred,
    Dolores,
    Bubbles,
    Rex,
    Harold,
}

impl Character {
    pub const ALL: [Character; 5] = [
        Character::Fred,
        Character::Dolores,
        Character::Bubbles,
        Character::Rex,
        Character::Harold,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Character::Fred => "Fred",
            Character::Dolores => "Dolores",
            Character::Bubbles => "Bubbles",
            Character::Rex => "Rex",
            Character::Harold => "Harold",
        }
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}
