#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use book_catalog::application::seed::seed_catalog;
use book_catalog::infrastructure::memory::MemoryStore;
use book_catalog::routes::{app_router, router};
use book_catalog::state::AppState;
use serde_json::{Value, json};

/// Ids assigned by the seed to the sample entities.
pub const SPRING_MICROSERVICES: i64 = 1;
pub const PRO_SPRING_BOOT: i64 = 2;
pub const GUTIERREZ: i64 = 1;
pub const RV: i64 = 2;

pub fn create_test_state() -> AppState {
    AppState::in_memory(MemoryStore::new())
}

pub async fn create_seeded_state() -> AppState {
    let state = create_test_state();
    seed_catalog(&state.book_service, &state.author_service)
        .await
        .unwrap();
    state
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Server over the full application service, path normalization included.
pub fn make_app_server(state: AppState) -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
}

pub async fn make_seeded_server() -> TestServer {
    make_server(create_seeded_state().await)
}

pub async fn create_author(server: &TestServer, first_name: &str, last_name: &str) -> i64 {
    let response = server
        .post("/authors")
        .json(&json!({ "firstName": first_name, "lastName": last_name }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

pub fn book_body(title: &str, authors: &[i64]) -> Value {
    json!({
        "title": title,
        "description": "D",
        "publishedDate": "2020-01-01",
        "price": { "amount": "9.99", "currency": "USD" },
        "authors": authors,
    })
}

pub async fn create_book(server: &TestServer, title: &str, authors: &[i64]) -> i64 {
    let response = server.post("/books").json(&book_body(title, authors)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

/// Titles of a `{ "items": [...] }` book list, in response order.
pub fn titles(list: &Value) -> Vec<String> {
    list["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect()
}
