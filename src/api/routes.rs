//! Catalog route configuration.

use crate::api::handlers::{
    author_list_handler, book_list_handler, category_list_handler, create_author_handler,
    create_book_handler, create_category_handler, delete_author_handler, delete_book_handler,
    delete_category_handler, get_author_handler, get_book_handler, get_category_handler,
    update_author_handler, update_book_handler, update_category_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All catalog routes.
///
/// # Endpoints
///
/// - `GET    /books`             - List books (filter + pagination envelope)
/// - `POST   /books`             - Create a book
/// - `GET    /books/{id}`        - Fetch a book with populated references
/// - `PUT    /books/{id}`        - Partially update a book
/// - `DELETE /books/{id}`        - Delete a book
/// - `/authors`, `/authors/{id}`       - Analogous author CRUD
/// - `/categories`, `/categories/{id}` - Analogous category CRUD
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(book_list_handler).post(create_book_handler))
        .route(
            "/books/{id}",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .route(
            "/authors",
            get(author_list_handler).post(create_author_handler),
        )
        .route(
            "/authors/{id}",
            get(get_author_handler)
                .put(update_author_handler)
                .delete(delete_author_handler),
        )
        .route(
            "/categories",
            get(category_list_handler).post(create_category_handler),
        )
        .route(
            "/categories/{id}",
            get(get_category_handler)
                .put(update_category_handler)
                .delete(delete_category_handler),
        )
}
