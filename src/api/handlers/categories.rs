//! Handlers for the category endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::api::dto::category::{
    CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest, category_schema,
};
use crate::api::dto::message::MessageResponse;
use crate::domain::entities::{CategoryPatch, NewCategory};
use crate::error::AppError;
use crate::state::AppState;

use super::books::decode;

/// Lists the whole category collection.
///
/// # Endpoint
///
/// `GET /categories`
pub async fn category_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = state.categories.list().await?;
    Ok(Json(
        categories.into_iter().map(CategoryResponse::from).collect(),
    ))
}

/// Fetches a single category.
///
/// # Endpoint
///
/// `GET /categories/{id}`
pub async fn get_category_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CategoryResponse>, AppError> {
    let id = state.id_format.parse(&id)?;
    let category = state.categories.get(&id).await?;
    Ok(Json(category.into()))
}

/// Creates a category.
///
/// # Endpoint
///
/// `POST /categories`
pub async fn create_category_handler(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    category_schema().check(&payload)?;
    let request: CreateCategoryRequest = decode(payload)?;

    let created = state
        .categories
        .create(NewCategory {
            name: request.name,
            description: request.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Partially updates a category.
///
/// # Endpoint
///
/// `PUT /categories/{id}`
pub async fn update_category_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<CategoryResponse>, AppError> {
    let id = state.id_format.parse(&id)?;
    category_schema().check_partial(&payload)?;
    let request: UpdateCategoryRequest = decode(payload)?;

    let updated = state
        .categories
        .update(
            &id,
            CategoryPatch {
                name: request.name,
                description: request.description,
            },
        )
        .await?;

    Ok(Json(updated.into()))
}

/// Deletes a category.
///
/// Books referencing the category keep their reference; their populated
/// view shows a null category afterwards.
///
/// # Endpoint
///
/// `DELETE /categories/{id}`
pub async fn delete_category_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = state.id_format.parse(&id)?;
    state.categories.delete(&id).await?;
    Ok(Json(MessageResponse::new("Category deleted")))
}
