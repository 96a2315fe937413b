//! Category entity.

use crate::domain::id::EntityId;

/// A genre/category referenced by books in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

/// Input data for creating a new category. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Partial update for an existing category. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Category {
    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_merges_partial_fields() {
        let mut category = Category {
            id: EntityId::new("1"),
            name: "Sci-Fi".to_string(),
            description: "Science fiction.".to_string(),
        };

        category.apply(CategoryPatch {
            name: None,
            description: Some("Speculative fiction grounded in science.".to_string()),
        });

        assert_eq!(category.name, "Sci-Fi");
        assert_eq!(
            category.description,
            "Speculative fiction grounded in science."
        );
    }
}
