//! DTOs and field specification for the book endpoints.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::api::dto::author::AuthorResponse;
use crate::api::dto::category::CategoryResponse;
use crate::domain::entities::PopulatedBook;
use crate::validation::{FieldSpec, Schema};

/// Earliest accepted publication year.
const MIN_PUBLICATION_YEAR: i64 = 1900;

/// Field specification for book payloads.
///
/// Rebuilt per call because the upper bound on `publicationYear` is the
/// current year.
pub fn book_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::text("title").required().min(3),
        FieldSpec::text("author").required(),
        FieldSpec::text("category").required(),
        FieldSpec::integer("publicationYear")
            .required()
            .min(MIN_PUBLICATION_YEAR)
            .max(i64::from(Utc::now().year())),
    ])
}

/// Body of `POST /books`, decoded after [`book_schema`] has accepted it.
/// `author` and `category` carry identifiers of existing entities.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub category: String,
    pub publication_year: i32,
}

/// Body of `PUT /books/{id}`. All fields optional; absent fields are left
/// unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub publication_year: Option<i32>,
}

/// JSON representation of a book with populated references.
///
/// `author`/`category` are `null` when the referenced entity no longer
/// exists.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub author: Option<AuthorResponse>,
    pub category: Option<CategoryResponse>,
    pub publication_year: i32,
}

impl From<PopulatedBook> for BookResponse {
    fn from(populated: PopulatedBook) -> Self {
        BookResponse {
            id: populated.book.id.to_string(),
            title: populated.book.title,
            author: populated.author.map(AuthorResponse::from),
            category: populated.category.map(CategoryResponse::from),
            publication_year: populated.book.publication_year,
        }
    }
}

/// Envelope of `GET /books`: the filter-wide total plus the echoed paging.
#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub data: Vec<BookResponse>,
}
