//! Test helpers for the board API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use threadboard::config::{ErrorStyle, WebConfig};
use threadboard::web::handlers::AppState;
use threadboard::web::router::create_router;
use threadboard::Database;

/// Create a test server with an in-memory database and the given error style.
pub async fn create_test_server_with_style(error_style: ErrorStyle) -> (TestServer, Database) {
    let config = WebConfig {
        cors_origins: vec![],
        error_style,
    };

    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let app_state = Arc::new(AppState::new(db.clone()));

    let router = create_router(app_state, &config);
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Create a test server using the default (compat) error style.
pub async fn create_test_server() -> (TestServer, Database) {
    create_test_server_with_style(ErrorStyle::Compat).await
}

/// The error object every failure is reported with.
pub fn error_object() -> Value {
    json!({ "error": "an error has occurred" })
}

/// Post a thread and return its ID, found through the board listing.
pub async fn post_thread(server: &TestServer, board: &str, text: &str, password: &str) -> String {
    server
        .post(&format!("/api/threads/{board}"))
        .json(&json!({ "text": text, "delete_password": password }))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let threads = server
        .get(&format!("/api/threads/{board}"))
        .await
        .json::<Value>();
    threads
        .as_array()
        .expect("listing is an array")
        .iter()
        .find(|t| t["text"] == text)
        .and_then(|t| t["_id"].as_str())
        .expect("posted thread is listed")
        .to_string()
}

/// Post a reply and return its ID, found through the thread view.
pub async fn post_reply(
    server: &TestServer,
    board: &str,
    thread_id: &str,
    text: &str,
    password: &str,
) -> String {
    server
        .post(&format!("/api/replies/{board}"))
        .json(&json!({ "thread_id": thread_id, "text": text, "delete_password": password }))
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let thread = get_thread(server, board, thread_id).await;
    thread["replies"]
        .as_array()
        .expect("replies is an array")
        .iter()
        .rev()
        .find(|r| r["text"] == text)
        .and_then(|r| r["_id"].as_str())
        .expect("posted reply is in the thread")
        .to_string()
}

/// Fetch a whole thread.
pub async fn get_thread(server: &TestServer, board: &str, thread_id: &str) -> Value {
    server
        .get(&format!("/api/replies/{board}"))
        .add_query_param("thread_id", thread_id)
        .await
        .json::<Value>()
}

/// Assert a thread or reply object carries none of the hidden fields.
pub fn assert_no_hidden_fields(value: &Value) {
    let obj = value.as_object().expect("expected an object");
    assert!(!obj.contains_key("reported"), "reported leaked: {value}");
    assert!(
        !obj.contains_key("delete_password"),
        "delete_password leaked: {value}"
    );
}
