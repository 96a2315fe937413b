//! Application layer services implementing business logic.
//!
//! Services consume the domain repository traits and provide a clean API
//! for the HTTP handlers. Read-time reference population — fetch the book,
//! fetch the referenced author/category, merge — lives in
//! [`services::book_service::BookService`].

pub mod services;
