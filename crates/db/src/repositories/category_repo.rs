//! Repository for categories.
//!
//! Categories nest at most two levels deep: a category may only be
//! created under a top-level parent.

use tokio::sync::RwLock;
use txcat_core::error::CoreError;
use txcat_core::types::{new_id, EntityId};
use txcat_core::validation::validate_category_name;

use crate::models::category::{Category, CategoryList, CategoryView};

/// Provides CRUD operations over the category list.
#[derive(Debug, Default)]
pub struct CategoryRepo {
    categories: RwLock<Vec<Category>>,
}

impl CategoryRepo {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with existing categories, kept in the given order.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: RwLock::new(categories),
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// All categories in insertion order.
    pub async fn list(&self) -> CategoryList {
        CategoryList {
            categories: self.categories.read().await.clone(),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Category> {
        self.categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// The category plus its immediate children, or `None` if it does not exist.
    pub async fn find_with_children(&self, id: &str) -> Option<CategoryView> {
        let categories = self.categories.read().await;
        let category = categories.iter().find(|c| c.id == id)?.clone();
        Some(CategoryView {
            category,
            children: children_of(&categories, id),
        })
    }

    /// Immediate children of `id`; empty when there are none or `id` is unknown.
    pub async fn children(&self, id: &str) -> Vec<Category> {
        children_of(&self.categories.read().await, id)
    }

    pub async fn exists(&self, id: &str) -> bool {
        self.categories.read().await.iter().any(|c| c.id == id)
    }

    /// Whether any category, at any level, already uses `name`.
    pub async fn name_exists(&self, name: &str) -> bool {
        name_taken(&self.categories.read().await, name)
    }

    /// Same lookup as [`exists`](Self::exists), named for parent validation.
    pub async fn parent_exists(&self, parent_id: &str) -> bool {
        self.exists(parent_id).await
    }

    /// 1 if the category is a subcategory, 0 if it is top-level or unknown.
    pub async fn depth(&self, id: &str) -> u8 {
        depth_of(&self.categories.read().await, id)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new category under `parent_id` (`""` for top-level).
    ///
    /// Checks, in order: name not taken, name format, parent exists,
    /// parent is top-level.
    pub async fn create(&self, name: &str, parent_id: &str) -> Result<Category, CoreError> {
        let mut categories = self.categories.write().await;

        if name_taken(&categories, name) {
            return Err(CoreError::DuplicateCategoryName(name.to_string()));
        }
        validate_category_name(name)?;

        if !parent_id.is_empty() {
            if !categories.iter().any(|c| c.id == parent_id) {
                return Err(CoreError::ParentIdNotFound(parent_id.to_string()));
            }
            if depth_of(&categories, parent_id) > 0 {
                return Err(CoreError::CategoryTooNested(parent_id.to_string()));
            }
        }

        let category = Category {
            id: new_id(),
            name: name.to_string(),
            parent_id: parent_id.to_string(),
        };
        categories.push(category.clone());

        tracing::debug!(category_id = %category.id, total = categories.len(), "Category stored");
        Ok(category)
    }

    /// Rename a category in place. The parent is immutable.
    ///
    /// Checks, in order: category exists, name not taken, name format.
    pub async fn rename(&self, id: &str, name: &str) -> Result<Category, CoreError> {
        let mut categories = self.categories.write().await;

        let index = categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CoreError::CategoryNotFound(id.to_string()))?;

        if name_taken(&categories, name) {
            return Err(CoreError::DuplicateCategoryName(name.to_string()));
        }
        validate_category_name(name)?;

        categories[index].name = name.to_string();
        Ok(categories[index].clone())
    }

    /// Delete a category together with its immediate children.
    ///
    /// Returns the ids of every removed category, the requested one first,
    /// so that dependent questions can be removed as well.
    pub async fn delete(&self, id: &str) -> Result<Vec<EntityId>, CoreError> {
        let mut categories = self.categories.write().await;

        if !categories.iter().any(|c| c.id == id) {
            return Err(CoreError::CategoryNotFound(id.to_string()));
        }

        let mut removed = vec![id.to_string()];
        removed.extend(
            categories
                .iter()
                .filter(|c| c.parent_id == id)
                .map(|c| c.id.clone()),
        );
        categories.retain(|c| !removed.contains(&c.id));

        Ok(removed)
    }
}

// ---------------------------------------------------------------------------
// Helpers (operate on an already-locked slice)
// ---------------------------------------------------------------------------

fn children_of(categories: &[Category], id: &str) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| c.parent_id == id)
        .cloned()
        .collect()
}

fn name_taken(categories: &[Category], name: &str) -> bool {
    categories.iter().any(|c| c.name == name)
}

fn depth_of(categories: &[Category], id: &str) -> u8 {
    match categories.iter().find(|c| c.id == id) {
        Some(c) if !c.is_top_level() => 1,
        _ => 0,
    }
}
