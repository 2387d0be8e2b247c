//! Read-only catalog lookups.

use serde::{Deserialize, Serialize};

/// A row of the `categories` collection, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// A row of the `characters` collection, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
}

/// Both lookups are projected to their name only.
pub const NAME_PROJECTION: &[&str] = &["name"];
