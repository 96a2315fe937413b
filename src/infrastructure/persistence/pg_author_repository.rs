//! PostgreSQL implementation of the author repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Author, AuthorPatch, NewAuthor};
use crate::domain::id::{EntityId, generate_hex_id};
use crate::domain::repositories::AuthorRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: String,
    name: String,
    biography: String,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author {
            id: EntityId::new(row.id),
            name: row.name,
            biography: row.biography,
        }
    }
}

/// PostgreSQL repository for author storage and retrieval.
pub struct PgAuthorRepository {
    pool: Arc<PgPool>,
}

impl PgAuthorRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn insert(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let row: AuthorRow = sqlx::query_as(
            r#"
            INSERT INTO authors (id, name, biography)
            VALUES ($1, $2, $3)
            RETURNING id, name, biography
            "#,
        )
        .bind(generate_hex_id().as_str())
        .bind(&new_author.name)
        .bind(&new_author.biography)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find(&self, id: &EntityId) -> Result<Option<Author>, AppError> {
        let row: Option<AuthorRow> =
            sqlx::query_as("SELECT id, name, biography FROM authors WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Author::from))
    }

    async fn list_all(&self) -> Result<Vec<Author>, AppError> {
        let rows: Vec<AuthorRow> =
            sqlx::query_as("SELECT id, name, biography FROM authors ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn update(
        &self,
        id: &EntityId,
        patch: AuthorPatch,
    ) -> Result<Option<Author>, AppError> {
        let row: Option<AuthorRow> = sqlx::query_as(
            r#"
            UPDATE authors
            SET name      = COALESCE($2, name),
                biography = COALESCE($3, biography)
            WHERE id = $1
            RETURNING id, name, biography
            "#,
        )
        .bind(id.as_str())
        .bind(patch.name)
        .bind(patch.biography)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn delete(&self, id: &EntityId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id.as_str())
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
