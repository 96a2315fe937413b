mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── Create / read / update / delete lifecycle ───────────────────────────────

#[tokio::test]
async fn test_book_lifecycle() {
    let server = common::test_server();
    let author_id = common::create_author(&server, "Frank Herbert").await;
    let category_id = common::create_category(&server, "Sci-Fi").await;

    // Create.
    let response = server
        .post("/books")
        .json(&json!({
            "title": "Dune",
            "author": author_id,
            "category": category_id,
            "publicationYear": 1965,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created = response.json::<Value>();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["title"], "Dune");
    assert_eq!(created["publicationYear"], 1965);
    assert_eq!(created["author"]["name"], "Frank Herbert");
    assert_eq!(created["category"]["name"], "Sci-Fi");

    // Read back: same fields.
    let response = server.get(&format!("/books/{id}")).await;
    response.assert_status_ok();
    let fetched = response.json::<Value>();
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["title"], "Dune");
    assert_eq!(fetched["author"]["name"], "Frank Herbert");

    // Partial update: only the year changes.
    let response = server
        .put(&format!("/books/{id}"))
        .json(&json!({ "publicationYear": 1966 }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<Value>();
    assert_eq!(updated["publicationYear"], 1966);
    assert_eq!(updated["title"], "Dune");
    assert_eq!(updated["author"]["name"], "Frank Herbert");

    // Delete, then the id is gone.
    let response = server.delete(&format!("/books/{id}")).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Book deleted successfully"
    );

    server.get(&format!("/books/{id}")).await.assert_status_not_found();
}

#[tokio::test]
async fn test_created_ids_are_unique_after_deletion() {
    let server = common::test_server();
    let author_id = common::create_author(&server, "Frank Herbert").await;
    let category_id = common::create_category(&server, "Sci-Fi").await;

    let first = common::create_book(&server, "Dune", &author_id, &category_id, 1965).await;
    server
        .delete(&format!("/books/{first}"))
        .await
        .assert_status_ok();

    let second =
        common::create_book(&server, "Dune Messiah", &author_id, &category_id, 1969).await;
    assert_ne!(first, second);
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_future_year_names_the_field() {
    let server = common::test_server();
    let author_id = common::create_author(&server, "Frank Herbert").await;
    let category_id = common::create_category(&server, "Sci-Fi").await;

    let response = server
        .post("/books")
        .json(&json!({
            "title": "Dune",
            "author": author_id,
            "category": category_id,
            "publicationYear": 3000,
        }))
        .await;

    response.assert_status_bad_request();
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("publicationYear"), "got: {error}");
}

#[tokio::test]
async fn test_create_missing_title() {
    let server = common::test_server();
    let author_id = common::create_author(&server, "Frank Herbert").await;
    let category_id = common::create_category(&server, "Sci-Fi").await;

    let response = server
        .post("/books")
        .json(&json!({
            "author": author_id,
            "category": category_id,
            "publicationYear": 1965,
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "\"title\" is required");
}

#[tokio::test]
async fn test_create_short_title() {
    let server = common::test_server();
    let author_id = common::create_author(&server, "Frank Herbert").await;
    let category_id = common::create_category(&server, "Sci-Fi").await;

    let response = server
        .post("/books")
        .json(&json!({
            "title": "It",
            "author": author_id,
            "category": category_id,
            "publicationYear": 1965,
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_rejects_unknown_field() {
    let server = common::test_server();
    let author_id = common::create_author(&server, "Frank Herbert").await;
    let category_id = common::create_category(&server, "Sci-Fi").await;

    let response = server
        .post("/books")
        .json(&json!({
            "title": "Dune",
            "author": author_id,
            "category": category_id,
            "publicationYear": 1965,
            "rating": 5,
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "\"rating\" is not allowed");
}

#[tokio::test]
async fn test_create_rejects_unknown_author_reference() {
    let server = common::test_server();
    let category_id = common::create_category(&server, "Sci-Fi").await;

    let response = server
        .post("/books")
        .json(&json!({
            "title": "Dune",
            "author": "999",
            "category": category_id,
            "publicationYear": 1965,
        }))
        .await;

    response.assert_status_bad_request();
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("does not exist"), "got: {error}");
}

#[tokio::test]
async fn test_create_rejects_malformed_author_reference() {
    let server = common::test_server();
    let category_id = common::create_category(&server, "Sci-Fi").await;

    let response = server
        .post("/books")
        .json(&json!({
            "title": "Dune",
            "author": "not-an-id",
            "category": category_id,
            "publicationYear": 1965,
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "Invalid ID");
}

// ─── Identifier validation ───────────────────────────────────────────────────

#[tokio::test]
async fn test_get_malformed_id_is_400_not_404() {
    let server = common::test_server();
    let response = server.get("/books/not-a-valid-id").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"], "Invalid ID");
}

#[tokio::test]
async fn test_get_missing_book_is_404() {
    let server = common::test_server();
    let response = server.get("/books/999").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "Book not found");
}

// ─── Update edge cases ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_empty_body_is_400() {
    let server = common::test_server();
    let author_id = common::create_author(&server, "Frank Herbert").await;
    let category_id = common::create_category(&server, "Sci-Fi").await;
    let id = common::create_book(&server, "Dune", &author_id, &category_id, 1965).await;

    let response = server.put(&format!("/books/{id}")).json(&json!({})).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_missing_book_is_404() {
    let server = common::test_server();
    let response = server
        .put("/books/999")
        .json(&json!({ "publicationYear": 1966 }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_can_rewire_author_reference() {
    let server = common::test_server();
    let herbert = common::create_author(&server, "Frank Herbert").await;
    let tolkien = common::create_author(&server, "J. R. R. Tolkien").await;
    let category_id = common::create_category(&server, "Sci-Fi").await;
    let id = common::create_book(&server, "Dune", &herbert, &category_id, 1965).await;

    let response = server
        .put(&format!("/books/{id}"))
        .json(&json!({ "author": tolkien }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["author"]["name"],
        "J. R. R. Tolkien"
    );
}

// ─── Listing, filtering, pagination ──────────────────────────────────────────

#[tokio::test]
async fn test_list_envelope_and_pagination() {
    let server = common::test_server();
    let author_id = common::create_author(&server, "Frank Herbert").await;
    let category_id = common::create_category(&server, "Sci-Fi").await;
    for (title, year) in [("Dune", 1965), ("Dune Messiah", 1969), ("Children of Dune", 1976)] {
        common::create_book(&server, title, &author_id, &category_id, year).await;
    }

    let response = server.get("/books?page=2&limit=2").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["title"], "Children of Dune");

    // Out-of-range page: empty slice, total still filter-wide.
    let body = server.get("/books?page=9&limit=2").await.json::<Value>();
    assert_eq!(body["total"], 3);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_populates_references() {
    let server = common::test_server();
    let author_id = common::create_author(&server, "Frank Herbert").await;
    let category_id = common::create_category(&server, "Sci-Fi").await;
    common::create_book(&server, "Dune", &author_id, &category_id, 1965).await;

    let body = server.get("/books").await.json::<Value>();
    assert_eq!(body["data"][0]["author"]["name"], "Frank Herbert");
    assert_eq!(body["data"][0]["category"]["name"], "Sci-Fi");
}

#[tokio::test]
async fn test_list_filters_are_case_insensitive_substrings() {
    let server = common::test_server();
    let herbert = common::create_author(&server, "Frank Herbert").await;
    let austen = common::create_author(&server, "Jane Austen").await;
    let scifi = common::create_category(&server, "Sci-Fi").await;
    let drama = common::create_category(&server, "Drama").await;
    common::create_book(&server, "Dune", &herbert, &scifi, 1965).await;
    common::create_book(&server, "Sanditon", &austen, &drama, 1925).await;

    let body = server.get("/books?author=HERB").await.json::<Value>();
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["title"], "Dune");

    let body = server.get("/books?genre=sci").await.json::<Value>();
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["title"], "Dune");

    let body = server
        .get("/books?author=austen&genre=sci")
        .await
        .json::<Value>();
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_list_rejects_bad_paging() {
    let server = common::test_server();
    server.get("/books?page=0").await.assert_status_bad_request();
    server
        .get("/books?limit=101")
        .await
        .assert_status_bad_request();
}

// ─── Dangling references ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_deleted_author_populates_as_null() {
    let server = common::test_server();
    let author_id = common::create_author(&server, "Frank Herbert").await;
    let category_id = common::create_category(&server, "Sci-Fi").await;
    let id = common::create_book(&server, "Dune", &author_id, &category_id, 1965).await;

    server
        .delete(&format!("/authors/{author_id}"))
        .await
        .assert_status_ok();

    let body = server.get(&format!("/books/{id}")).await.json::<Value>();
    assert!(body["author"].is_null());
    assert_eq!(body["category"]["name"], "Sci-Fi");
}
