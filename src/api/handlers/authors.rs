//! Handlers for the author endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::api::dto::author::{
    AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest, author_schema,
};
use crate::api::dto::message::MessageResponse;
use crate::domain::entities::{AuthorPatch, NewAuthor};
use crate::error::AppError;
use crate::state::AppState;

use super::books::decode;

/// Lists the whole author collection.
///
/// # Endpoint
///
/// `GET /authors`
pub async fn author_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuthorResponse>>, AppError> {
    let authors = state.authors.list().await?;
    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

/// Fetches a single author.
///
/// # Endpoint
///
/// `GET /authors/{id}`
pub async fn get_author_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AuthorResponse>, AppError> {
    let id = state.id_format.parse(&id)?;
    let author = state.authors.get(&id).await?;
    Ok(Json(author.into()))
}

/// Creates an author.
///
/// # Endpoint
///
/// `POST /authors`
pub async fn create_author_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<AuthorResponse>), AppError> {
    author_schema().check(&payload)?;
    let request: CreateAuthorRequest = decode(payload)?;

    let created = state
        .authors
        .create(NewAuthor {
            name: request.name,
            biography: request.biography,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Partially updates an author.
///
/// # Endpoint
///
/// `PUT /authors/{id}`
pub async fn update_author_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<AuthorResponse>, AppError> {
    let id = state.id_format.parse(&id)?;
    author_schema().check_partial(&payload)?;
    let request: UpdateAuthorRequest = decode(payload)?;

    let updated = state
        .authors
        .update(
            &id,
            AuthorPatch {
                name: request.name,
                biography: request.biography,
            },
        )
        .await?;

    Ok(Json(updated.into()))
}

/// Deletes an author.
///
/// Books referencing the author keep their reference; their populated view
/// shows a null author afterwards.
///
/// # Endpoint
///
/// `DELETE /authors/{id}`
pub async fn delete_author_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = state.id_format.parse(&id)?;
    state.authors.delete(&id).await?;
    Ok(Json(MessageResponse::new("Author deleted")))
}
