//! PostgreSQL implementation of the book repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::id::{EntityId, generate_hex_id};
use crate::domain::repositories::{BookFilter, BookRepository};
use crate::error::AppError;

use super::like_pattern;

/// Database row shape; kept separate so domain entities stay free of sqlx.
#[derive(sqlx::FromRow)]
struct BookRow {
    id: String,
    title: String,
    author_id: String,
    category_id: String,
    publication_year: i32,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: EntityId::new(row.id),
            title: row.title,
            author_id: EntityId::new(row.author_id),
            category_id: EntityId::new(row.category_id),
            publication_year: row.publication_year,
        }
    }
}

/// Filter terms match the referenced author/category names, so `list` and
/// `count` share this joined FROM/WHERE clause. LEFT JOIN keeps books with
/// dangling references in unfiltered listings; a name filter excludes them
/// because `NULL ILIKE` is never true.
const FILTERED_BOOKS: &str = r#"
    FROM books b
    LEFT JOIN authors a ON a.id = b.author_id
    LEFT JOIN categories c ON c.id = b.category_id
    WHERE ($1::text IS NULL OR a.name ILIKE $1)
      AND ($2::text IS NULL OR c.name ILIKE $2)
"#;

/// PostgreSQL repository for book storage and retrieval.
///
/// Identifiers are hex tokens minted application-side before insert.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn insert(&self, new_book: NewBook) -> Result<Book, AppError> {
        let row: BookRow = sqlx::query_as(
            r#"
            INSERT INTO books (id, title, author_id, category_id, publication_year)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author_id, category_id, publication_year
            "#,
        )
        .bind(generate_hex_id().as_str())
        .bind(&new_book.title)
        .bind(new_book.author_id.as_str())
        .bind(new_book.category_id.as_str())
        .bind(new_book.publication_year)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find(&self, id: &EntityId) -> Result<Option<Book>, AppError> {
        let row: Option<BookRow> = sqlx::query_as(
            r#"
            SELECT id, title, author_id, category_id, publication_year
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn list(
        &self,
        filter: &BookFilter,
        page: i64,
        limit: i64,
    ) -> Result<Vec<Book>, AppError> {
        let offset = (page - 1) * limit;

        let sql = format!(
            "SELECT b.id, b.title, b.author_id, b.category_id, b.publication_year \
             {FILTERED_BOOKS} ORDER BY b.id LIMIT $3 OFFSET $4"
        );
        let rows: Vec<BookRow> = sqlx::query_as(&sql)
            .bind(filter.author.as_deref().map(like_pattern))
            .bind(filter.genre.as_deref().map(like_pattern))
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn count(&self, filter: &BookFilter) -> Result<i64, AppError> {
        let sql = format!("SELECT COUNT(*) {FILTERED_BOOKS}");
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(filter.author.as_deref().map(like_pattern))
            .bind(filter.genre.as_deref().map(like_pattern))
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: &EntityId, patch: BookPatch) -> Result<Option<Book>, AppError> {
        let row: Option<BookRow> = sqlx::query_as(
            r#"
            UPDATE books
            SET title            = COALESCE($2, title),
                author_id        = COALESCE($3, author_id),
                category_id      = COALESCE($4, category_id),
                publication_year = COALESCE($5, publication_year)
            WHERE id = $1
            RETURNING id, title, author_id, category_id, publication_year
            "#,
        )
        .bind(id.as_str())
        .bind(patch.title)
        .bind(patch.author_id.map(|a| a.as_str().to_string()))
        .bind(patch.category_id.map(|c| c.as_str().to_string()))
        .bind(patch.publication_year)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn delete(&self, id: &EntityId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.as_str())
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
