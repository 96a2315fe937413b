//! Author entity.

use crate::domain::id::EntityId;

/// An author referenced by books in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: EntityId,
    pub name: String,
    pub biography: String,
}

/// Input data for creating a new author. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub biography: String,
}

/// Partial update for an existing author. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub biography: Option<String>,
}

impl Author {
    pub fn apply(&mut self, patch: AuthorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(biography) = patch.biography {
            self.biography = biography;
        }
    }
}
