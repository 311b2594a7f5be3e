mod common;

use axum::http::StatusCode;
use common::{telegram_user, TestApp, MONDAY};
use serde_json::json;

#[tokio::test]
async fn test_booking_creates_one_notification() {
    let app = TestApp::new().await;
    let (master_id, service_id) = app.seed_monday_master().await;

    app.book(111, master_id, service_id, MONDAY, "10:00").await;

    let (status, body) = app.send("GET", "/api/v1/notifications", Some(telegram_user(111)), None).await;
    assert_eq!(status, StatusCode::OK);

    let notifications = body["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["type"], "booking_created");
    assert_eq!(notifications[0]["isRead"], false);
    assert!(notifications[0]["message"].as_str().unwrap().contains("2026-10-19 at 10:00"));
    assert_eq!(body["unreadCount"], 1);
}

#[tokio::test]
async fn test_notifications_newest_first() {
    let app = TestApp::new().await;
    let (master_id, service_id) = app.seed_monday_master().await;

    app.book(111, master_id, service_id, MONDAY, "09:00").await;
    app.book(111, master_id, service_id, MONDAY, "11:00").await;

    let (_, body) = app.send("GET", "/api/v1/notifications", Some(telegram_user(111)), None).await;
    let notifications = body["notifications"].as_array().unwrap();

    assert_eq!(notifications.len(), 2);
    assert!(notifications[0]["message"].as_str().unwrap().contains("11:00"));
    assert!(notifications[1]["message"].as_str().unwrap().contains("09:00"));
    assert_eq!(body["unreadCount"], 2);
}

#[tokio::test]
async fn test_mark_read_only_touches_own_notifications() {
    let app = TestApp::new().await;
    let (master_id, service_id) = app.seed_monday_master().await;

    app.book(111, master_id, service_id, MONDAY, "09:00").await;
    app.book(222, master_id, service_id, MONDAY, "11:00").await;

    let (_, theirs) = app.send("GET", "/api/v1/notifications", Some(telegram_user(222)), None).await;
    let their_id = theirs["notifications"][0]["id"].as_i64().unwrap();

    let (status, body) = app.send("PUT", "/api/v1/notifications", Some(telegram_user(111)), Some(json!({
        "notificationId": their_id
    }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, theirs) = app.send("GET", "/api/v1/notifications", Some(telegram_user(222)), None).await;
    assert_eq!(theirs["notifications"][0]["isRead"], false);
    assert_eq!(theirs["unreadCount"], 1);

    let (status, _) = app.send("PUT", "/api/v1/notifications", Some(telegram_user(222)), Some(json!({
        "notificationId": their_id
    }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, theirs) = app.send("GET", "/api/v1/notifications", Some(telegram_user(222)), None).await;
    assert_eq!(theirs["notifications"][0]["isRead"], true);
    assert_eq!(theirs["unreadCount"], 0);
}

#[tokio::test]
async fn test_mark_all_read() {
    let app = TestApp::new().await;
    let (master_id, service_id) = app.seed_monday_master().await;

    app.book(111, master_id, service_id, MONDAY, "09:00").await;
    app.book(111, master_id, service_id, MONDAY, "10:00").await;
    app.book(222, master_id, service_id, MONDAY, "11:00").await;

    let (status, body) = app.send("POST", "/api/v1/notifications", Some(telegram_user(111)), Some(json!({
        "action": "mark_all_read"
    }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, mine) = app.send("GET", "/api/v1/notifications", Some(telegram_user(111)), None).await;
    assert_eq!(mine["unreadCount"], 0);

    let (_, theirs) = app.send("GET", "/api/v1/notifications", Some(telegram_user(222)), None).await;
    assert_eq!(theirs["unreadCount"], 1);
}

#[tokio::test]
async fn test_unknown_post_action_is_not_allowed() {
    let app = TestApp::new().await;
    app.send("GET", "/api/v1/profile", Some(telegram_user(111)), None).await;

    let (status, _) = app.send("POST", "/api/v1/notifications", Some(telegram_user(111)), Some(json!({
        "action": "delete_all"
    }))).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.send("GET", "/api/v1/notifications", Some(telegram_user(555)), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
    assert_eq!(app.count("SELECT COUNT(*) FROM users").await, 0);
}

#[tokio::test]
async fn test_missing_identity_is_unauthorized() {
    let app = TestApp::new().await;

    let (status, _) = app.send("GET", "/api/v1/notifications", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.send("GET", "/api/v1/notifications", Some(json!({})), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mark_read_without_id_is_a_silent_success() {
    let app = TestApp::new().await;
    let (master_id, service_id) = app.seed_monday_master().await;
    app.book(111, master_id, service_id, MONDAY, "10:00").await;

    let (status, body) = app.send("PUT", "/api/v1/notifications", Some(telegram_user(111)), Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = app.send("GET", "/api/v1/notifications", Some(telegram_user(111)), None).await;
    assert_eq!(body["unreadCount"], 1);
}
