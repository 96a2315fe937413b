//! Repository trait for book data access.

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::id::EntityId;
use crate::error::AppError;
use async_trait::async_trait;

/// Optional filter terms for book listings.
///
/// Both terms are matched case-insensitively as substrings of the
/// *referenced* author name and category name. Filtering happens before
/// pagination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub author: Option<String>,
    pub genre: Option<String>,
}

impl BookFilter {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.genre.is_none()
    }
}

/// Repository interface for books.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL
/// - [`crate::infrastructure::memory::MemoryBookRepository`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts a new book, assigning a fresh unique identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert(&self, new_book: NewBook) -> Result<Book, AppError>;

    /// Finds a book by id. `Ok(None)` when absent.
    async fn find(&self, id: &EntityId) -> Result<Option<Book>, AppError>;

    /// Lists one page of books matching the filter.
    ///
    /// `page` is 1-indexed; the slice is
    /// `[(page - 1) * limit, (page - 1) * limit + limit)`. A page past the
    /// end of the filtered collection yields an empty vector, not an error.
    async fn list(
        &self,
        filter: &BookFilter,
        page: i64,
        limit: i64,
    ) -> Result<Vec<Book>, AppError>;

    /// Counts books matching the filter, ignoring pagination.
    async fn count(&self, filter: &BookFilter) -> Result<i64, AppError>;

    /// Merges the supplied fields into an existing book.
    ///
    /// Returns the updated book, or `Ok(None)` when no book has this id.
    async fn update(&self, id: &EntityId, patch: BookPatch) -> Result<Option<Book>, AppError>;

    /// Removes a book. `Ok(false)` when no book has this id.
    async fn delete(&self, id: &EntityId) -> Result<bool, AppError>;
}
