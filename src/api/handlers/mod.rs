//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod authors;
pub mod books;
pub mod categories;
pub mod health;

pub use authors::{
    author_list_handler, create_author_handler, delete_author_handler, get_author_handler,
    update_author_handler,
};
pub use books::{
    book_list_handler, create_book_handler, delete_book_handler, get_book_handler,
    update_book_handler,
};
pub use categories::{
    category_list_handler, create_category_handler, delete_category_handler,
    get_category_handler, update_category_handler,
};
pub use health::health_handler;
