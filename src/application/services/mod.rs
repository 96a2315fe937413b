//! Business logic services for the application layer.

pub mod author_service;
pub mod book_service;
pub mod category_service;

pub use author_service::AuthorService;
pub use book_service::{BookListing, BookPatchInput, BookService, NewBookInput};
pub use category_service::CategoryService;
