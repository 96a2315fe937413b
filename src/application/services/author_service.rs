//! Author orchestration.

use std::sync::Arc;

use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::domain::id::EntityId;
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

/// Service for author CRUD.
///
/// Deleting an author that books still reference is allowed; the affected
/// books populate a null author afterwards.
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    pub async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        self.authors.insert(new_author).await
    }

    pub async fn get(&self, id: &EntityId) -> Result<Author, AppError> {
        self.authors
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Author not found"))
    }

    pub async fn list(&self) -> Result<Vec<Author>, AppError> {
        self.authors.list_all().await
    }

    pub async fn update(&self, id: &EntityId, patch: AuthorPatch) -> Result<Author, AppError> {
        self.authors
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Author not found"))
    }

    pub async fn delete(&self, id: &EntityId) -> Result<(), AppError> {
        if self.authors.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Author not found"))
        }
    }
}
