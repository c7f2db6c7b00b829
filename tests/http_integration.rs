//! Integration tests for the HTTP ordering API
//!
//! These tests verify the complete HTTP surface including:
//! - Menu listing
//! - Session start, cookies and chat turns
//! - Cart inspection and line removal
//! - Staff hand-off
//! - Error handling for unknown sessions
//! - Recovery from a handler panic

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

// Import from the main crate
use kafe_digital::router::{create_app_router, with_middleware};
use kafe_digital::session::{routes, AppState};

/// Helper function to create a test app instance
fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState::new());
    create_app_router(state)
}

/// Helper function to send a request and get the JSON response
async fn send_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => builder
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Helper function to open a session and return its id
async fn start_session(app: &axum::Router) -> String {
    let (status, body) = send_request(app, "POST", "/chat/start", None).await;
    assert_eq!(status, StatusCode::OK);
    body["sessionId"].as_str().unwrap().to_string()
}

/// Helper function to send one chat turn
async fn say(app: &axum::Router, session_id: &str, message: &str) -> Value {
    let (status, body) = send_request(
        app,
        "POST",
        "/chat",
        Some(json!({ "sessionId": session_id, "message": message })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn test_menu_lists_items_and_modifiers() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/menu", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 23);
    assert_eq!(items[0]["id"], "espresso");
    assert_eq!(items[0]["price"], 15000);
    assert_eq!(items[0]["category"], "kopi");

    let sizes = body["modifiers"]["ukuran"].as_array().unwrap();
    assert_eq!(sizes.len(), 3);
    assert!(body["modifiers"]["susu"].is_array());
}

#[tokio::test]
async fn test_start_sets_cookie_and_welcomes() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/chat/start")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("kafe_session="));

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert!(body["reply"].as_str().unwrap().contains("Selamat datang"));
    assert_eq!(body["state"], "taking_order");
    assert!(cookie.contains(body["sessionId"].as_str().unwrap()));
}

#[tokio::test]
async fn test_chat_without_session_opens_one() {
    let app = create_test_app();

    let (status, body) =
        send_request(&app, "POST", "/chat", Some(json!({ "message": "2 croissant" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["sessionId"].is_string());
    assert_eq!(body["state"], "taking_order");
    assert!(body["reply"]
        .as_str()
        .unwrap()
        .contains("Berhasil menambahkan 2 Croissant ke pesanan"));
}

#[tokio::test]
async fn test_chat_uses_session_cookie() {
    let app = create_test_app();
    let session_id = start_session(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .header(header::COOKIE, format!("kafe_session={}", session_id))
        .body(Body::from(json!({ "message": "1 mocha" }).to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let (_, cart) = send_request(&app, "GET", &format!("/chat/{}/cart", session_id), None).await;
    assert_eq!(cart["total"], 32000);
}

#[tokio::test]
async fn test_full_order_flow() {
    let app = create_test_app();
    let session_id = start_session(&app).await;

    let body = say(&app, &session_id, "Saya mau 2 cappuccino dan 1 sandwich").await;
    assert!(body["reply"].as_str().unwrap().contains("Rp 85,000"));

    let (status, cart) =
        send_request(&app, "GET", &format!("/chat/{}/cart", session_id), None).await;
    assert_eq!(status, StatusCode::OK);
    let lines = cart["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["item"]["id"], "cappuccino");
    assert_eq!(lines[0]["quantity"], 2);
    assert_eq!(lines[1]["item"]["id"], "sandwich");
    assert_eq!(cart["total"], 85000);

    let body = say(&app, &session_id, "konfirmasi").await;
    assert_eq!(body["state"], "confirming_order");
    assert!(body["reply"].as_str().unwrap().contains("(ya/tidak)"));

    let body = say(&app, &session_id, "lanjut Budi Santoso").await;
    assert_eq!(body["state"], "order_complete");
    let reply = body["reply"].as_str().unwrap();
    assert!(reply.contains("ORD-1001"));
    assert!(reply.contains("• Nama: Budi Santoso"));

    // The host resets the session for the next order
    let body = say(&app, &session_id, "1 donut").await;
    assert_eq!(body["state"], "taking_order");
    let (_, cart) = send_request(&app, "GET", &format!("/chat/{}/cart", session_id), None).await;
    assert_eq!(cart["lines"].as_array().unwrap().len(), 1);
    assert_eq!(cart["total"], 12000);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let app = create_test_app();
    let first = start_session(&app).await;
    let second = start_session(&app).await;

    say(&app, &first, "3 espresso").await;

    let (_, first_cart) = send_request(&app, "GET", &format!("/chat/{}/cart", first), None).await;
    let (_, second_cart) =
        send_request(&app, "GET", &format!("/chat/{}/cart", second), None).await;
    assert_eq!(first_cart["total"], 45000);
    assert_eq!(second_cart["total"], 0);
    assert_eq!(second_cart["summary"], "Pesanan masih kosong");
}

#[tokio::test]
async fn test_remove_cart_line() {
    let app = create_test_app();
    let session_id = start_session(&app).await;
    say(&app, &session_id, "Saya mau 2 cappuccino dan 1 sandwich").await;

    let (status, body) = send_request(
        &app,
        "DELETE",
        &format!("/chat/{}/cart/0", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Berhasil menghapus Cappuccino dari pesanan");
    assert_eq!(body["total"], 35000);

    let (status, body) = send_request(
        &app,
        "DELETE",
        &format!("/chat/{}/cart/5", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Item tidak ditemukan dalam pesanan");
}

#[tokio::test]
async fn test_handoff_then_order() {
    let app = create_test_app();
    let session_id = start_session(&app).await;

    let (status, body) = send_request(
        &app,
        "POST",
        &format!("/chat/{}/handoff", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "waiting_human");

    let body = say(&app, &session_id, "1 croissant").await;
    assert_eq!(body["state"], "taking_order");
    assert!(body["reply"]
        .as_str()
        .unwrap()
        .starts_with("Terima kasih atas responnya!"));
}

#[tokio::test]
async fn test_quit_closes_session() {
    let app = create_test_app();
    let session_id = start_session(&app).await;

    let body = say(&app, &session_id, "keluar").await;
    assert!(body["reply"].as_str().unwrap().contains("Sampai jumpa!"));

    let (status, body) =
        send_request(&app, "GET", &format!("/chat/{}/cart", session_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains(&session_id));
}

#[tokio::test]
async fn test_unknown_session_routes() {
    let app = create_test_app();

    let (status, _) = send_request(&app, "GET", "/chat/nope/cart", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_request(&app, "POST", "/chat/nope/handoff", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_request(&app, "DELETE", "/chat/nope/cart/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_chat_body_is_rejected() {
    let app = create_test_app();

    let (status, _) = send_request(&app, "POST", "/chat", Some(json!({ "text": "hi" }))).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_huge_repeated_quantity_is_answered() {
    let app = create_test_app();
    let session_id = start_session(&app).await;

    say(&app, &session_id, "4000000000 donut").await;
    let body = say(&app, &session_id, "4000000000 donut").await;
    assert!(body["reply"].as_str().unwrap().contains("(total: 4294967295)"));

    let (_, cart) = send_request(&app, "GET", &format!("/chat/{}/cart", session_id), None).await;
    assert_eq!(cart["lines"][0]["quantity"], 4294967295_u64);
}

#[tokio::test]
async fn test_panicking_handler_returns_json_error() {
    async fn explode() -> &'static str {
        panic!("turn exploded")
    }

    let state = Arc::new(AppState::new());
    let panicking = routes().route("/explode", axum::routing::get(explode));
    let app = with_middleware(panicking, state);

    let (status, body) = send_request(&app, "GET", "/explode", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Terjadi kesalahan: turn exploded");

    // The server keeps answering afterwards
    let (status, _) = send_request(&app, "GET", "/menu", None).await;
    assert_eq!(status, StatusCode::OK);
}
