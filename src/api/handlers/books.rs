//! Handlers for the book endpoints.
//!
//! Each handler runs the same ordered chain: identifier validation (when
//! the path carries an id), schema validation (when a body is expected),
//! then the store operation, then serialization. The first failure
//! short-circuits into [`AppError`].

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::api::dto::book::{
    BookListResponse, BookResponse, CreateBookRequest, UpdateBookRequest, book_schema,
};
use crate::api::dto::message::MessageResponse;
use crate::api::dto::pagination::BookListQuery;
use crate::application::services::{BookPatchInput, NewBookInput};
use crate::error::AppError;
use crate::state::AppState;

/// Lists books with optional filtering and pagination.
///
/// # Endpoint
///
/// `GET /books?author=&genre=&page=&limit=`
///
/// Filters are case-insensitive substring matches against the populated
/// author and category names, applied before pagination. The response
/// envelope echoes the paging and reports the filter-wide total.
pub async fn book_list_handler(
    State(state): State<AppState>,
    Query(query): Query<BookListQuery>,
) -> Result<Json<BookListResponse>, AppError> {
    let (page, limit) = query.paging().map_err(AppError::validation)?;
    let listing = state.books.list(query.filter(), page, limit).await?;

    Ok(Json(BookListResponse {
        total: listing.total,
        page,
        limit,
        data: listing.books.into_iter().map(BookResponse::from).collect(),
    }))
}

/// Fetches a single book with populated author and category.
///
/// # Endpoint
///
/// `GET /books/{id}`
///
/// # Errors
///
/// Returns 400 for a malformed id, 404 when no book has it.
pub async fn get_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookResponse>, AppError> {
    let id = state.id_format.parse(&id)?;
    let book = state.books.get(&id).await?;
    Ok(Json(book.into()))
}

/// Creates a book.
///
/// # Endpoint
///
/// `POST /books`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Dune",
///   "author": "<author id>",
///   "category": "<category id>",
///   "publicationYear": 1965
/// }
/// ```
///
/// # Errors
///
/// Returns 400 when the body fails the field specification or a reference
/// names no existing entity.
pub async fn create_book_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<BookResponse>), AppError> {
    book_schema().check(&payload)?;
    let request: CreateBookRequest = decode(payload)?;

    let created = state
        .books
        .create(NewBookInput {
            title: request.title,
            author: request.author,
            category: request.category,
            publication_year: request.publication_year,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Partially updates a book.
///
/// # Endpoint
///
/// `PUT /books/{id}`
///
/// Only supplied fields change; the rest of the record is untouched.
///
/// # Errors
///
/// Returns 400 for a malformed id or body, 404 when no book has the id.
pub async fn update_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<BookResponse>, AppError> {
    let id = state.id_format.parse(&id)?;
    book_schema().check_partial(&payload)?;
    let request: UpdateBookRequest = decode(payload)?;

    let updated = state
        .books
        .update(
            &id,
            BookPatchInput {
                title: request.title,
                author: request.author,
                category: request.category,
                publication_year: request.publication_year,
            },
        )
        .await?;

    Ok(Json(updated.into()))
}

/// Deletes a book.
///
/// # Endpoint
///
/// `DELETE /books/{id}`
pub async fn delete_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = state.id_format.parse(&id)?;
    state.books.delete(&id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}

/// Decodes a schema-checked payload into its typed request struct.
/// A mismatch here means the schema and the struct disagree.
pub(super) fn decode<T: serde::de::DeserializeOwned>(payload: Value) -> Result<T, AppError> {
    serde_json::from_value(payload)
        .map_err(|e| AppError::internal(format!("validated payload failed to decode: {e}")))
}
