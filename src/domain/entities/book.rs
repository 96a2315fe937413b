//! Book entity: a catalog record referencing an author and a category.

use crate::domain::entities::{Author, Category};
use crate::domain::id::EntityId;

/// A book as stored in the catalog.
///
/// Author and category are kept as references; the stored record never
/// embeds the referenced entities. See [`PopulatedBook`] for the read-time
/// merged view.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: EntityId,
    pub title: String,
    pub author_id: EntityId,
    pub category_id: EntityId,
    pub publication_year: i32,
}

/// Input data for creating a new book. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author_id: EntityId,
    pub category_id: EntityId,
    pub publication_year: i32,
}

/// Partial update for an existing book.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author_id: Option<EntityId>,
    pub category_id: Option<EntityId>,
    pub publication_year: Option<i32>,
}

impl Book {
    /// Merges a patch into this book, leaving absent fields untouched.
    pub fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author_id) = patch.author_id {
            self.author_id = author_id;
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(year) = patch.publication_year {
            self.publication_year = year;
        }
    }
}

/// A book with its references resolved at read time.
///
/// `author`/`category` are `None` when the referenced entity has been
/// deleted since the book was written.
#[derive(Debug, Clone)]
pub struct PopulatedBook {
    pub book: Book,
    pub author: Option<Author>,
    pub category: Option<Category>,
}
