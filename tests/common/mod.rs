#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use bookshelf::routes::app_router;
use bookshelf::state::AppState;

/// Builds a test server over the full router with the in-memory backend.
/// Identifiers are therefore positive integers.
pub fn test_server() -> TestServer {
    TestServer::new(app_router(AppState::in_memory())).unwrap()
}

pub async fn create_author(server: &TestServer, name: &str) -> String {
    let response = server
        .post("/authors")
        .json(&json!({ "name": name, "biography": "Wrote several books." }))
        .await;
    response.assert_status(StatusCode::CREATED);
    id_of(&response.json::<Value>())
}

pub async fn create_category(server: &TestServer, name: &str) -> String {
    let response = server
        .post("/categories")
        .json(&json!({ "name": name, "description": "A shelf of its own." }))
        .await;
    response.assert_status(StatusCode::CREATED);
    id_of(&response.json::<Value>())
}

pub async fn create_book(
    server: &TestServer,
    title: &str,
    author_id: &str,
    category_id: &str,
    year: i32,
) -> String {
    let response = server
        .post("/books")
        .json(&json!({
            "title": title,
            "author": author_id,
            "category": category_id,
            "publicationYear": year,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    id_of(&response.json::<Value>())
}

fn id_of(body: &Value) -> String {
    body["id"]
        .as_str()
        .expect("response body carries an id")
        .to_string()
}
