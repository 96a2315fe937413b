//! In-memory storage backend.
//!
//! Repository implementations over a shared [`MemoryCatalog`]. Used when no
//! `DATABASE_URL` is configured, and by the integration tests, which drive
//! the full router without a database.

mod catalog;

pub use catalog::MemoryCatalog;

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{
    Author, AuthorPatch, Book, BookPatch, Category, CategoryPatch, NewAuthor, NewBook, NewCategory,
};
use crate::domain::id::EntityId;
use crate::domain::repositories::{
    AuthorRepository, BookFilter, BookRepository, CategoryRepository,
};
use crate::error::AppError;

use catalog::{CatalogInner, contains_ci, paginate};

/// In-memory implementation of [`BookRepository`].
pub struct MemoryBookRepository {
    catalog: Arc<MemoryCatalog>,
}

impl MemoryBookRepository {
    pub fn new(catalog: Arc<MemoryCatalog>) -> Self {
        Self { catalog }
    }
}

/// Filter predicate shared by `list` and `count`: terms match the
/// referenced author/category name. A book whose reference dangles never
/// matches a term for that reference.
fn matches_filter(inner: &CatalogInner, book: &Book, filter: &BookFilter) -> bool {
    if let Some(term) = &filter.author {
        let matched = inner
            .authors
            .iter()
            .find(|a| a.id == book.author_id)
            .is_some_and(|a| contains_ci(&a.name, term));
        if !matched {
            return false;
        }
    }
    if let Some(term) = &filter.genre {
        let matched = inner
            .categories
            .iter()
            .find(|c| c.id == book.category_id)
            .is_some_and(|c| contains_ci(&c.name, term));
        if !matched {
            return false;
        }
    }
    true
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn insert(&self, new_book: NewBook) -> Result<Book, AppError> {
        let mut inner = self.catalog.write()?;
        let book = Book {
            id: self.catalog.mint_id(),
            title: new_book.title,
            author_id: new_book.author_id,
            category_id: new_book.category_id,
            publication_year: new_book.publication_year,
        };
        inner.books.push(book.clone());
        Ok(book)
    }

    async fn find(&self, id: &EntityId) -> Result<Option<Book>, AppError> {
        let inner = self.catalog.read()?;
        Ok(inner.books.iter().find(|b| &b.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &BookFilter,
        page: i64,
        limit: i64,
    ) -> Result<Vec<Book>, AppError> {
        let inner = self.catalog.read()?;
        let filtered: Vec<Book> = inner
            .books
            .iter()
            .filter(|b| matches_filter(&inner, b, filter))
            .cloned()
            .collect();
        Ok(paginate(&filtered, page, limit))
    }

    async fn count(&self, filter: &BookFilter) -> Result<i64, AppError> {
        let inner = self.catalog.read()?;
        let count = inner
            .books
            .iter()
            .filter(|b| matches_filter(&inner, b, filter))
            .count();
        Ok(count as i64)
    }

    async fn update(&self, id: &EntityId, patch: BookPatch) -> Result<Option<Book>, AppError> {
        let mut inner = self.catalog.write()?;
        match inner.books.iter_mut().find(|b| &b.id == id) {
            Some(book) => {
                book.apply(patch);
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &EntityId) -> Result<bool, AppError> {
        let mut inner = self.catalog.write()?;
        let before = inner.books.len();
        inner.books.retain(|b| &b.id != id);
        Ok(inner.books.len() < before)
    }
}

/// In-memory implementation of [`AuthorRepository`].
pub struct MemoryAuthorRepository {
    catalog: Arc<MemoryCatalog>,
}

impl MemoryAuthorRepository {
    pub fn new(catalog: Arc<MemoryCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    async fn insert(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let mut inner = self.catalog.write()?;
        let author = Author {
            id: self.catalog.mint_id(),
            name: new_author.name,
            biography: new_author.biography,
        };
        inner.authors.push(author.clone());
        Ok(author)
    }

    async fn find(&self, id: &EntityId) -> Result<Option<Author>, AppError> {
        let inner = self.catalog.read()?;
        Ok(inner.authors.iter().find(|a| &a.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Author>, AppError> {
        let inner = self.catalog.read()?;
        Ok(inner.authors.clone())
    }

    async fn update(
        &self,
        id: &EntityId,
        patch: AuthorPatch,
    ) -> Result<Option<Author>, AppError> {
        let mut inner = self.catalog.write()?;
        match inner.authors.iter_mut().find(|a| &a.id == id) {
            Some(author) => {
                author.apply(patch);
                Ok(Some(author.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &EntityId) -> Result<bool, AppError> {
        let mut inner = self.catalog.write()?;
        let before = inner.authors.len();
        inner.authors.retain(|a| &a.id != id);
        Ok(inner.authors.len() < before)
    }
}

/// In-memory implementation of [`CategoryRepository`].
pub struct MemoryCategoryRepository {
    catalog: Arc<MemoryCatalog>,
}

impl MemoryCategoryRepository {
    pub fn new(catalog: Arc<MemoryCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn insert(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let mut inner = self.catalog.write()?;
        let category = Category {
            id: self.catalog.mint_id(),
            name: new_category.name,
            description: new_category.description,
        };
        inner.categories.push(category.clone());
        Ok(category)
    }

    async fn find(&self, id: &EntityId) -> Result<Option<Category>, AppError> {
        let inner = self.catalog.read()?;
        Ok(inner.categories.iter().find(|c| &c.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Category>, AppError> {
        let inner = self.catalog.read()?;
        Ok(inner.categories.clone())
    }

    async fn update(
        &self,
        id: &EntityId,
        patch: CategoryPatch,
    ) -> Result<Option<Category>, AppError> {
        let mut inner = self.catalog.write()?;
        match inner.categories.iter_mut().find(|c| &c.id == id) {
            Some(category) => {
                category.apply(patch);
                Ok(Some(category.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &EntityId) -> Result<bool, AppError> {
        let mut inner = self.catalog.write()?;
        let before = inner.categories.len();
        inner.categories.retain(|c| &c.id != id);
        Ok(inner.categories.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repos() -> (
        MemoryBookRepository,
        MemoryAuthorRepository,
        MemoryCategoryRepository,
    ) {
        let catalog = Arc::new(MemoryCatalog::new());
        (
            MemoryBookRepository::new(catalog.clone()),
            MemoryAuthorRepository::new(catalog.clone()),
            MemoryCategoryRepository::new(catalog),
        )
    }

    async fn seed_refs(
        authors: &MemoryAuthorRepository,
        categories: &MemoryCategoryRepository,
        name: &str,
        genre: &str,
    ) -> (EntityId, EntityId) {
        let author = authors
            .insert(NewAuthor {
                name: name.to_string(),
                biography: "bio".to_string(),
            })
            .await
            .unwrap();
        let category = categories
            .insert(NewCategory {
                name: genre.to_string(),
                description: "desc".to_string(),
            })
            .await
            .unwrap();
        (author.id, category.id)
    }

    async fn seed_book(
        books: &MemoryBookRepository,
        title: &str,
        author_id: &EntityId,
        category_id: &EntityId,
        year: i32,
    ) -> Book {
        books
            .insert(NewBook {
                title: title.to_string(),
                author_id: author_id.clone(),
                category_id: category_id.clone(),
                publication_year: year,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_find_round_trips() {
        let (books, authors, categories) = repos();
        let (aid, cid) = seed_refs(&authors, &categories, "Frank Herbert", "Sci-Fi").await;

        let created = seed_book(&books, "Dune", &aid, &cid, 1965).await;
        let found = books.find(&created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_ids_are_unique_after_delete_and_recreate() {
        let (books, authors, categories) = repos();
        let (aid, cid) = seed_refs(&authors, &categories, "A", "G").await;

        let first = seed_book(&books, "One", &aid, &cid, 2000).await;
        let second = seed_book(&books, "Two", &aid, &cid, 2001).await;
        assert!(books.delete(&second.id).await.unwrap());

        // Recreating after a delete must not reuse the freed id.
        let third = seed_book(&books, "Three", &aid, &cid, 2002).await;
        assert_ne!(third.id, second.id);
        assert_ne!(third.id, first.id);
    }

    #[tokio::test]
    async fn test_update_merges_and_missing_is_none() {
        let (books, authors, categories) = repos();
        let (aid, cid) = seed_refs(&authors, &categories, "A", "G").await;
        let created = seed_book(&books, "Dune", &aid, &cid, 1965).await;

        let updated = books
            .update(
                &created.id,
                BookPatch {
                    publication_year: Some(1966),
                    ..BookPatch::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.publication_year, 1966);
        assert_eq!(updated.title, "Dune");

        let missing = books
            .update(&EntityId::new("999"), BookPatch::default())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete_then_find_is_none() {
        let (books, authors, categories) = repos();
        let (aid, cid) = seed_refs(&authors, &categories, "A", "G").await;
        let created = seed_book(&books, "Dune", &aid, &cid, 1965).await;

        assert!(books.delete(&created.id).await.unwrap());
        assert!(books.find(&created.id).await.unwrap().is_none());
        assert!(!books.delete(&created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_filter_is_case_insensitive_substring() {
        let (books, authors, categories) = repos();
        let (herbert, scifi) = seed_refs(&authors, &categories, "Frank Herbert", "Sci-Fi").await;
        let (austen, drama) = seed_refs(&authors, &categories, "Jane Austen", "Drama").await;
        seed_book(&books, "Dune", &herbert, &scifi, 1965).await;
        seed_book(&books, "Emma", &austen, &drama, 1815).await;

        let filter = BookFilter {
            author: Some("HERB".to_string()),
            genre: None,
        };
        let listed = books.list(&filter, 1, 10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Dune");
        assert_eq!(books.count(&filter).await.unwrap(), 1);

        let filter = BookFilter {
            author: None,
            genre: Some("sci".to_string()),
        };
        assert_eq!(books.count(&filter).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_dangling_reference_excluded_by_filter_but_listed_unfiltered() {
        let (books, authors, categories) = repos();
        let (aid, cid) = seed_refs(&authors, &categories, "Frank Herbert", "Sci-Fi").await;
        seed_book(&books, "Dune", &aid, &cid, 1965).await;
        assert!(authors.delete(&aid).await.unwrap());

        let unfiltered = books.list(&BookFilter::default(), 1, 10).await.unwrap();
        assert_eq!(unfiltered.len(), 1);

        let filter = BookFilter {
            author: Some("herbert".to_string()),
            genre: None,
        };
        assert!(books.list(&filter, 1, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_pagination_slices_and_reports_full_total() {
        let (books, authors, categories) = repos();
        let (aid, cid) = seed_refs(&authors, &categories, "A", "G").await;
        for i in 0..5 {
            seed_book(&books, &format!("Book {i}"), &aid, &cid, 2000 + i).await;
        }

        let filter = BookFilter::default();
        let page2 = books.list(&filter, 2, 2).await.unwrap();
        assert_eq!(page2.len(), 2);
        assert_eq!(page2[0].title, "Book 2");
        assert_eq!(books.count(&filter).await.unwrap(), 5);

        // Out-of-range page: empty slice, total unchanged.
        assert!(books.list(&filter, 10, 2).await.unwrap().is_empty());
        assert_eq!(books.count(&filter).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_authors_and_categories_crud() {
        let (_, authors, categories) = repos();

        let author = authors
            .insert(NewAuthor {
                name: "Frank Herbert".to_string(),
                biography: "bio".to_string(),
            })
            .await
            .unwrap();
        let updated = authors
            .update(
                &author.id,
                AuthorPatch {
                    biography: Some("longer bio".to_string()),
                    name: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.biography, "longer bio");
        assert_eq!(authors.list_all().await.unwrap().len(), 1);
        assert!(authors.delete(&author.id).await.unwrap());
        assert!(authors.list_all().await.unwrap().is_empty());

        let category = categories
            .insert(NewCategory {
                name: "Sci-Fi".to_string(),
                description: "desc".to_string(),
            })
            .await
            .unwrap();
        assert!(categories.find(&category.id).await.unwrap().is_some());
        assert!(categories.delete(&category.id).await.unwrap());
        assert!(categories.find(&category.id).await.unwrap().is_none());
    }
}
