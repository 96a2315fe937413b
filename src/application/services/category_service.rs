//! Category orchestration.

use std::sync::Arc;

use crate::domain::entities::{Category, CategoryPatch, NewCategory};
use crate::domain::id::EntityId;
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

/// Service for category CRUD.
///
/// Deleting a category that books still reference is allowed; the affected
/// books populate a null category afterwards.
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        self.categories.insert(new_category).await
    }

    pub async fn get(&self, id: &EntityId) -> Result<Category, AppError> {
        self.categories
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }

    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        self.categories.list_all().await
    }

    pub async fn update(
        &self,
        id: &EntityId,
        patch: CategoryPatch,
    ) -> Result<Category, AppError> {
        self.categories
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }

    pub async fn delete(&self, id: &EntityId) -> Result<(), AppError> {
        if self.categories.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Category not found"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCategoryRepository;

    #[tokio::test]
    async fn test_get_missing_category_is_not_found() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find().times(1).returning(|_| Ok(None));

        let service = CategoryService::new(Arc::new(categories));
        let err = service.get(&EntityId::new("1")).await.unwrap_err();

        assert_eq!(err.to_string(), "Category not found");
    }
}
