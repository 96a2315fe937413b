//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthorService, BookService, CategoryService};
use crate::domain::id::IdFormat;
use crate::domain::repositories::{AuthorRepository, BookRepository, CategoryRepository};
use crate::infrastructure::memory::{
    MemoryAuthorRepository, MemoryBookRepository, MemoryCatalog, MemoryCategoryRepository,
};
use crate::infrastructure::persistence::{
    PgAuthorRepository, PgBookRepository, PgCategoryRepository,
};

/// Active storage backend, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::Postgres => "postgres",
        }
    }
}

/// Application state: the services plus the identifier format the active
/// backend expects. Handlers never see a repository directly.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<BookService>,
    pub authors: Arc<AuthorService>,
    pub categories: Arc<CategoryService>,
    pub id_format: IdFormat,
    pub backend: StoreBackend,
}

impl AppState {
    /// State over the in-memory catalog (serial identifiers). Used when no
    /// `DATABASE_URL` is configured, and by the integration tests.
    pub fn in_memory() -> Self {
        let catalog = Arc::new(MemoryCatalog::new());
        Self::assemble(
            Arc::new(MemoryBookRepository::new(catalog.clone())),
            Arc::new(MemoryAuthorRepository::new(catalog.clone())),
            Arc::new(MemoryCategoryRepository::new(catalog)),
            IdFormat::Serial,
            StoreBackend::Memory,
        )
    }

    /// State over PostgreSQL repositories (hex token identifiers).
    pub fn postgres(pool: PgPool) -> Self {
        let pool = Arc::new(pool);
        Self::assemble(
            Arc::new(PgBookRepository::new(pool.clone())),
            Arc::new(PgAuthorRepository::new(pool.clone())),
            Arc::new(PgCategoryRepository::new(pool)),
            IdFormat::Hex,
            StoreBackend::Postgres,
        )
    }

    fn assemble(
        book_repository: Arc<dyn BookRepository>,
        author_repository: Arc<dyn AuthorRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        id_format: IdFormat,
        backend: StoreBackend,
    ) -> Self {
        Self {
            books: Arc::new(BookService::new(
                book_repository,
                author_repository.clone(),
                category_repository.clone(),
                id_format,
            )),
            authors: Arc::new(AuthorService::new(author_repository)),
            categories: Arc::new(CategoryService::new(category_repository)),
            id_format,
            backend,
        }
    }
}
