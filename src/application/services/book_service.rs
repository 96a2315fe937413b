//! Book orchestration: reference checks on write, population on read.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Author, Book, BookPatch, Category, NewBook, PopulatedBook};
use crate::domain::id::{EntityId, IdFormat};
use crate::domain::repositories::{
    AuthorRepository, BookFilter, BookRepository, CategoryRepository,
};
use crate::error::AppError;

/// Creation input as it arrives from the API: reference ids are still raw
/// strings and get validated against the active [`IdFormat`] here.
#[derive(Debug, Clone)]
pub struct NewBookInput {
    pub title: String,
    pub author: String,
    pub category: String,
    pub publication_year: i32,
}

/// Partial-update input; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct BookPatchInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub publication_year: Option<i32>,
}

/// One page of populated books plus the filter-wide total.
#[derive(Debug)]
pub struct BookListing {
    pub total: i64,
    pub books: Vec<PopulatedBook>,
}

/// Service for book CRUD with read-time reference population.
///
/// Population is an explicit lookup-and-merge: fetch the book, fetch the
/// referenced author and category by id, embed them in the returned view.
/// A reference whose target has been deleted populates as `None`.
pub struct BookService {
    books: Arc<dyn BookRepository>,
    authors: Arc<dyn AuthorRepository>,
    categories: Arc<dyn CategoryRepository>,
    id_format: IdFormat,
}

impl BookService {
    pub fn new(
        books: Arc<dyn BookRepository>,
        authors: Arc<dyn AuthorRepository>,
        categories: Arc<dyn CategoryRepository>,
        id_format: IdFormat,
    ) -> Self {
        Self {
            books,
            authors,
            categories,
            id_format,
        }
    }

    /// Creates a book. Both references must name existing entities.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidId`] when a reference id is malformed
    /// - [`AppError::Validation`] when a referenced entity does not exist
    pub async fn create(&self, input: NewBookInput) -> Result<PopulatedBook, AppError> {
        let (author_id, author) = self.require_author(&input.author).await?;
        let (category_id, category) = self.require_category(&input.category).await?;

        let book = self
            .books
            .insert(NewBook {
                title: input.title,
                author_id,
                category_id,
                publication_year: input.publication_year,
            })
            .await?;

        Ok(PopulatedBook {
            book,
            author: Some(author),
            category: Some(category),
        })
    }

    /// Retrieves a single book with its references populated.
    pub async fn get(&self, id: &EntityId) -> Result<PopulatedBook, AppError> {
        let book = self
            .books
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found"))?;
        self.populate(book).await
    }

    /// Lists one page of populated books. The total covers the whole
    /// filtered collection, whatever the requested page.
    pub async fn list(
        &self,
        filter: BookFilter,
        page: i64,
        limit: i64,
    ) -> Result<BookListing, AppError> {
        let total = self.books.count(&filter).await?;
        let books = self.books.list(&filter, page, limit).await?;

        // Memoize reference lookups across the page; a listing typically
        // repeats the same few authors and categories.
        let mut authors: HashMap<EntityId, Option<Author>> = HashMap::new();
        let mut categories: HashMap<EntityId, Option<Category>> = HashMap::new();

        let mut populated = Vec::with_capacity(books.len());
        for book in books {
            if !authors.contains_key(&book.author_id) {
                let fetched = self.authors.find(&book.author_id).await?;
                authors.insert(book.author_id.clone(), fetched);
            }
            if !categories.contains_key(&book.category_id) {
                let fetched = self.categories.find(&book.category_id).await?;
                categories.insert(book.category_id.clone(), fetched);
            }

            let author = authors.get(&book.author_id).cloned().flatten();
            let category = categories.get(&book.category_id).cloned().flatten();
            populated.push(PopulatedBook {
                book,
                author,
                category,
            });
        }

        Ok(BookListing {
            total,
            books: populated,
        })
    }

    /// Merges the supplied fields into an existing book. Re-wired
    /// references must name existing entities.
    pub async fn update(
        &self,
        id: &EntityId,
        input: BookPatchInput,
    ) -> Result<PopulatedBook, AppError> {
        let author_id = match &input.author {
            Some(raw) => Some(self.require_author(raw).await?.0),
            None => None,
        };
        let category_id = match &input.category {
            Some(raw) => Some(self.require_category(raw).await?.0),
            None => None,
        };

        let patch = BookPatch {
            title: input.title,
            author_id,
            category_id,
            publication_year: input.publication_year,
        };

        let book = self
            .books
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Book not found"))?;
        self.populate(book).await
    }

    /// Removes a book.
    pub async fn delete(&self, id: &EntityId) -> Result<(), AppError> {
        if self.books.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Book not found"))
        }
    }

    async fn populate(&self, book: Book) -> Result<PopulatedBook, AppError> {
        let author = self.authors.find(&book.author_id).await?;
        let category = self.categories.find(&book.category_id).await?;
        Ok(PopulatedBook {
            book,
            author,
            category,
        })
    }

    async fn require_author(&self, raw: &str) -> Result<(EntityId, Author), AppError> {
        let id = self.id_format.parse(raw)?;
        let author = self
            .authors
            .find(&id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Author {raw} does not exist")))?;
        Ok((id, author))
    }

    async fn require_category(&self, raw: &str) -> Result<(EntityId, Category), AppError> {
        let id = self.id_format.parse(raw)?;
        let category = self
            .categories
            .find(&id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Category {raw} does not exist")))?;
        Ok((id, category))
    }
}
