//! Web API Thread Tests
//!
//! Integration tests for the `/api/threads/:board` endpoints.

mod common;

use axum::http::header::{LOCATION, REFERER};
use axum::http::StatusCode;
use serde_json::{json, Value};
use threadboard::config::ErrorStyle;

use common::{
    assert_no_hidden_fields, create_test_server, create_test_server_with_style, error_object,
    get_thread, post_reply, post_thread,
};

#[tokio::test]
async fn test_create_thread_redirects_to_board() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/threads/general")
        .json(&json!({ "text": "first", "delete_password": "pw" }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/b/general/");
}

#[tokio::test]
async fn test_create_thread_redirects_to_referer() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/threads/general")
        .add_header(REFERER, "http://board.test/b/general/")
        .json(&json!({ "text": "first", "delete_password": "pw" }))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "http://board.test/b/general/");
}

#[tokio::test]
async fn test_create_thread_from_form() {
    let (server, _db) = create_test_server().await;

    server
        .post("/api/threads/general")
        .form(&[("text", "from a form"), ("delete_password", "pw")])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let threads = server.get("/api/threads/general").await.json::<Value>();
    assert_eq!(threads[0]["text"], "from a form");
}

#[tokio::test]
async fn test_new_thread_shape() {
    let (server, _db) = create_test_server().await;
    post_thread(&server, "general", "hello", "pw").await;

    let response = server.get("/api/threads/general").await;
    response.assert_status_ok();
    let threads = response.json::<Value>();
    let thread = &threads[0];

    assert_no_hidden_fields(thread);
    assert!(thread["_id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(thread["text"], "hello");
    assert_eq!(thread["created_on"], thread["bumped_on"]);
    assert_eq!(thread["replies"], json!([]));
    assert_eq!(thread["replycount"], 0);
}

#[tokio::test]
async fn test_create_thread_escapes_markup() {
    let (server, _db) = create_test_server().await;
    post_thread(&server, "general", "<script>alert(1)</script>", "pw").await;

    let threads = server.get("/api/threads/general").await.json::<Value>();
    assert_eq!(threads[0]["text"], "&lt;script&gt;alert(1)&lt;/script&gt;");
}

#[tokio::test]
async fn test_create_thread_missing_fields() {
    let (server, _db) = create_test_server().await;

    let response = server
        .post("/api/threads/general")
        .json(&json!({ "text": "no password" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), error_object());

    let response = server
        .post("/api/threads/general")
        .json(&json!({ "text": "", "delete_password": "pw" }))
        .await;
    assert_eq!(response.json::<Value>(), error_object());

    let threads = server.get("/api/threads/general").await.json::<Value>();
    assert_eq!(threads, json!([]));
}

#[tokio::test]
async fn test_create_thread_missing_fields_http_style() {
    let (server, _db) = create_test_server_with_style(ErrorStyle::Http).await;

    let response = server
        .post("/api/threads/general")
        .json(&json!({ "delete_password": "pw" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), error_object());
}

#[tokio::test]
async fn test_list_empty_board() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/api/threads/nobody-posts-here").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_is_limited_to_ten_most_recent() {
    let (server, _db) = create_test_server().await;
    for i in 0..12 {
        post_thread(&server, "general", &format!("thread {i}"), "pw").await;
    }

    let threads = server.get("/api/threads/general").await.json::<Value>();
    let texts: Vec<&str> = threads
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap())
        .collect();

    let expected: Vec<String> = (2..12).rev().map(|i| format!("thread {i}")).collect();
    assert_eq!(texts, expected);
}

#[tokio::test]
async fn test_reply_bumps_thread_to_top() {
    let (server, _db) = create_test_server().await;
    let older = post_thread(&server, "general", "older", "pw").await;
    post_thread(&server, "general", "newer", "pw").await;

    post_reply(&server, "general", &older, "bump", "pw").await;

    let threads = server.get("/api/threads/general").await.json::<Value>();
    assert_eq!(threads[0]["_id"], older);
    assert_eq!(threads[0]["bumped_on"], threads[0]["replies"][0]["created_on"]);
    assert_eq!(threads[1]["text"], "newer");
}

#[tokio::test]
async fn test_list_previews_three_latest_replies() {
    let (server, _db) = create_test_server().await;
    let thread_id = post_thread(&server, "general", "busy", "pw").await;
    for i in 0..5 {
        post_reply(&server, "general", &thread_id, &format!("reply {i}"), "pw").await;
    }

    let threads = server.get("/api/threads/general").await.json::<Value>();
    let thread = &threads[0];
    assert_eq!(thread["replycount"], 5);

    let replies = thread["replies"].as_array().unwrap();
    let texts: Vec<&str> = replies.iter().map(|r| r["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["reply 2", "reply 3", "reply 4"]);
    for reply in replies {
        assert_no_hidden_fields(reply);
    }
}

#[tokio::test]
async fn test_boards_are_isolated() {
    let (server, _db) = create_test_server().await;
    let thread_id = post_thread(&server, "general", "only here", "pw").await;

    let threads = server.get("/api/threads/other").await.json::<Value>();
    assert_eq!(threads, json!([]));

    let response = server
        .get("/api/replies/other")
        .add_query_param("thread_id", &thread_id)
        .await;
    assert_eq!(response.json::<Value>(), error_object());
}

#[tokio::test]
async fn test_report_thread() {
    let (server, _db) = create_test_server().await;
    let thread_id = post_thread(&server, "general", "report me", "pw").await;

    let response = server
        .put("/api/threads/general")
        .json(&json!({ "thread_id": thread_id }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "reported");

    // Reporting again is not an error.
    let response = server
        .put("/api/threads/general")
        .form(&[("report_id", thread_id.as_str())])
        .await;
    assert_eq!(response.text(), "reported");

    let thread = get_thread(&server, "general", &thread_id).await;
    assert_no_hidden_fields(&thread);
}

#[tokio::test]
async fn test_report_unknown_thread() {
    let (server, _db) = create_test_server().await;

    let response = server
        .put("/api/threads/general")
        .json(&json!({ "thread_id": "no-such-thread" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), error_object());

    let response = server.put("/api/threads/general").json(&json!({})).await;
    assert_eq!(response.json::<Value>(), error_object());
}

#[tokio::test]
async fn test_delete_thread_requires_password() {
    let (server, _db) = create_test_server().await;
    let thread_id = post_thread(&server, "general", "doomed", "secret").await;

    let response = server
        .delete("/api/threads/general")
        .json(&json!({ "thread_id": thread_id, "delete_password": "wrong" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "incorrect password");

    let thread = get_thread(&server, "general", &thread_id).await;
    assert_eq!(thread["text"], "doomed");

    let response = server
        .delete("/api/threads/general")
        .form(&[("thread_id", thread_id.as_str()), ("delete_password", "secret")])
        .await;
    assert_eq!(response.text(), "success");

    let thread = get_thread(&server, "general", &thread_id).await;
    assert_eq!(thread, error_object());
    let threads = server.get("/api/threads/general").await.json::<Value>();
    assert_eq!(threads, json!([]));
}

#[tokio::test]
async fn test_delete_thread_with_markup_password() {
    let (server, _db) = create_test_server().await;
    let thread_id = post_thread(&server, "general", "tricky", "<pw>").await;

    let response = server
        .delete("/api/threads/general")
        .json(&json!({ "thread_id": thread_id, "delete_password": "<pw>" }))
        .await;
    assert_eq!(response.text(), "success");
}

#[tokio::test]
async fn test_delete_unknown_thread() {
    let (server, _db) = create_test_server_with_style(ErrorStyle::Http).await;

    let response = server
        .delete("/api/threads/general")
        .json(&json!({ "thread_id": "no-such-thread", "delete_password": "pw" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), error_object());
}

#[tokio::test]
async fn test_security_headers_on_api_responses() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/api/threads/general").await;
    let headers = response.headers();
    assert_eq!(headers["X-Frame-Options"], "SAMEORIGIN");
    assert_eq!(headers["X-DNS-Prefetch-Control"], "off");
    assert_eq!(headers["Referrer-Policy"], "same-origin");
    assert_eq!(headers["X-Content-Type-Options"], "nosniff");
}

#[tokio::test]
async fn test_undecodable_board_name() {
    let (server, _db) = create_test_server().await;

    let response = server.get("/api/threads/%FF").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), error_object());
}

#[tokio::test]
async fn test_undecodable_board_name_http_style() {
    let (server, _db) = create_test_server_with_style(ErrorStyle::Http).await;

    let response = server.get("/api/threads/%FF").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), error_object());
}
