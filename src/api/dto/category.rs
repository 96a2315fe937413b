//! DTOs and field specification for the category endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Category;
use crate::validation::{FieldSpec, Schema};

/// Field specification for category payloads.
pub fn category_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::text("name").required().min(3).max(100),
        FieldSpec::text("description").required(),
    ])
}

/// Body of `POST /categories`.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: String,
}

/// Body of `PUT /categories/{id}`; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// JSON representation of a category.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id.to_string(),
            name: category.name,
            description: category.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_requires_description() {
        let err = category_schema()
            .check(&json!({ "name": "Sci-Fi" }))
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("description"));
    }
}
