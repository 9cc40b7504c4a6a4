//! Category models and DTOs.

use serde::{Deserialize, Serialize};
use txcat_core::types::EntityId;

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// A stored category.
///
/// Categories form an adjacency list: an empty `parent_id` marks a
/// top-level category, otherwise it holds the id of the parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "parentID")]
    pub parent_id: EntityId,
}

impl Category {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_empty()
    }
}

/// A category together with its immediate children. Built on read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryView {
    #[serde(flatten)]
    pub category: Category,
    pub children: Vec<Category>,
}

/// Response body for `GET /categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /categories`.
///
/// `parent_id` must be supplied even for top-level categories (as `""`),
/// so both fields stay optional here and presence is checked by the handler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategory {
    pub name: Option<String>,
    #[serde(rename = "parentID")]
    pub parent_id: Option<String>,
}

/// Body of `PATCH /categories/{id}`. Only the name is mutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenameCategory {
    pub name: Option<String>,
}
