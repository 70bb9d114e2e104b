use axum::http::StatusCode;
use chrono_tz::Europe::Zurich;
use pretty_assertions::assert_eq;
use serde_json::json;
use slotcast_api::handlers::notifications::NotificationsResponse;
use slotcast_core::models::notification::NotificationKind;
use uuid::Uuid;

use crate::test_utils::{GUEST, HOST, TestContext};

#[tokio::test]
async fn test_booking_notification_can_be_marked_read() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/api/bookings")
        .json(&json!({
            "hostId": HOST,
            "guestId": GUEST,
            "date": "2025-06-01",
            "startTime": "2025-06-01T09:00:00Z",
            "title": "Intro"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let inbox: NotificationsResponse = server
        .get(&format!("/api/users/{}/notifications", HOST))
        .await
        .json();
    assert_eq!(inbox.notifications.len(), 1);
    assert_eq!(inbox.unread_count, 1);

    let notification = &inbox.notifications[0];
    assert_eq!(notification.kind, NotificationKind::BookingRequest);
    assert_eq!(
        notification.message,
        "99 wants to book a meeting with you on Sunday, June 1, 2025 at 9:00 AM"
    );

    server
        .post(&format!("/api/notifications/{}/read", notification.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let inbox: NotificationsResponse = server
        .get(&format!("/api/users/{}/notifications", HOST))
        .await
        .json();
    assert_eq!(inbox.unread_count, 0);
    assert!(inbox.notifications[0].read);
}

#[tokio::test]
async fn test_guest_inbox_stays_empty() {
    let server = TestContext::new().server();

    let inbox: NotificationsResponse = server
        .get(&format!("/api/users/{}/notifications", GUEST))
        .await
        .json();

    assert!(inbox.notifications.is_empty());
    assert_eq!(inbox.unread_count, 0);
}

#[tokio::test]
async fn test_mark_unknown_notification_read() {
    let server = TestContext::new().server();

    let response = server
        .post(&format!("/api/notifications/{}/read", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_host_message_shows_local_working_hours() {
    let ctx = TestContext::new().with_timezone(Zurich);
    let server = ctx.server();

    // 09:00 in Zurich (CEST, UTC+2)
    server
        .post("/api/bookings")
        .json(&json!({
            "hostId": HOST,
            "guestId": GUEST,
            "date": "2025-06-01",
            "startTime": "2025-06-01T07:00:00Z",
            "title": "Intro"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let inbox: NotificationsResponse = server
        .get(&format!("/api/users/{}/notifications", HOST))
        .await
        .json();
    assert_eq!(
        inbox.notifications[0].message,
        "99 wants to book a meeting with you on Sunday, June 1, 2025 at 9:00 AM"
    );
}
