//! Repository trait for author data access.

use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::domain::id::EntityId;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for authors.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthorRepository`] - PostgreSQL
/// - [`crate::infrastructure::memory::MemoryAuthorRepository`] - in-memory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Inserts a new author, assigning a fresh unique identifier.
    async fn insert(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by id. `Ok(None)` when absent.
    async fn find(&self, id: &EntityId) -> Result<Option<Author>, AppError>;

    /// Returns the whole author collection.
    async fn list_all(&self) -> Result<Vec<Author>, AppError>;

    /// Merges the supplied fields into an existing author.
    /// `Ok(None)` when absent.
    async fn update(&self, id: &EntityId, patch: AuthorPatch)
    -> Result<Option<Author>, AppError>;

    /// Removes an author. `Ok(false)` when absent.
    ///
    /// Books referencing the author are left in place; their populated view
    /// shows a null author afterwards.
    async fn delete(&self, id: &EntityId) -> Result<bool, AppError>;
}
