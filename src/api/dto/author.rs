//! DTOs and field specification for the author endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Author;
use crate::validation::{FieldSpec, Schema};

/// Field specification for author payloads.
pub fn author_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::text("name").required().min(3).max(100),
        FieldSpec::text("biography").required(),
    ])
}

/// Body of `POST /authors`.
#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub biography: String,
}

/// Body of `PUT /authors/{id}`; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAuthorRequest {
    pub name: Option<String>,
    pub biography: Option<String>,
}

/// JSON representation of an author.
#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: String,
    pub name: String,
    pub biography: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        AuthorResponse {
            id: author.id.to_string(),
            name: author.name,
            biography: author.biography,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_bounds_name_length() {
        assert!(
            author_schema()
                .check(&json!({ "name": "Jo", "biography": "b" }))
                .is_err()
        );
        assert!(
            author_schema()
                .check(&json!({ "name": "a".repeat(101), "biography": "b" }))
                .is_err()
        );
        assert!(
            author_schema()
                .check(&json!({ "name": "Frank Herbert", "biography": "b" }))
                .is_ok()
        );
    }

    #[test]
    fn test_schema_requires_biography() {
        let err = author_schema()
            .check(&json!({ "name": "Frank Herbert" }))
            .unwrap_err();
        assert_eq!(err.field.as_deref(), Some("biography"));
    }
}
