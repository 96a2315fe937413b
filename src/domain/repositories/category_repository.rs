//! Repository trait for category data access.

use crate::domain::entities::{Category, CategoryPatch, NewCategory};
use crate::domain::id::EntityId;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] - PostgreSQL
/// - [`crate::infrastructure::memory::MemoryCategoryRepository`] - in-memory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Inserts a new category, assigning a fresh unique identifier.
    async fn insert(&self, new_category: NewCategory) -> Result<Category, AppError>;

    /// Finds a category by id. `Ok(None)` when absent.
    async fn find(&self, id: &EntityId) -> Result<Option<Category>, AppError>;

    /// Returns the whole category collection.
    async fn list_all(&self) -> Result<Vec<Category>, AppError>;

    /// Merges the supplied fields into an existing category.
    /// `Ok(None)` when absent.
    async fn update(
        &self,
        id: &EntityId,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, AppError>;

    /// Removes a category. `Ok(false)` when absent.
    ///
    /// Books referencing the category are left in place; their populated
    /// view shows a null category afterwards.
    async fn delete(&self, id: &EntityId) -> Result<bool, AppError>;
}
