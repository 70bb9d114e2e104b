use axum::http::StatusCode;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use slotcast_api::handlers::booking::{
    BookingWindowResponse, CreateBookingResponse, SlotsResponse,
};
use slotcast_core::models::meeting::{Meeting, MeetingStatus};

use crate::test_utils::{GUEST, HOST, TestContext, first_day};

#[tokio::test]
async fn test_health_check() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok", "hub": false }));
}

#[tokio::test]
async fn test_version_reports_crate() {
    let server = TestContext::new().server();

    let body: serde_json::Value = server.get("/version").await.json();

    assert_eq!(body["service"], "slotcast-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_booking_window_lists_every_day() {
    let server = TestContext::new().server();

    let window: BookingWindowResponse = server.get("/api/booking-window").await.json();

    assert_eq!(window.dates.len(), 14);
    assert_eq!(window.dates[0], first_day());
    assert_eq!(
        window.dates[13],
        NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()
    );
}

#[tokio::test]
async fn test_get_slots_returns_working_hours() {
    let server = TestContext::new().server();

    let response = server
        .get(&format!("/api/hosts/{}/slots", HOST))
        .add_query_param("date", "2025-06-02")
        .await;

    response.assert_status_ok();
    let body: SlotsResponse = response.json();
    assert_eq!(body.host_id, HOST);
    assert_eq!(body.slots.len(), 8);
    assert!(body.slots.iter().all(|slot| slot.available));
    assert_eq!(
        body.slots[0].start_time.to_rfc3339(),
        "2025-06-02T09:00:00+00:00"
    );
}

#[rstest]
#[case::before_window("2025-05-31")]
#[case::after_window("2025-06-15")]
#[tokio::test]
async fn test_get_slots_outside_window_is_rejected(#[case] date: &str) {
    let server = TestContext::new().server();

    let response = server
        .get(&format!("/api/hosts/{}/slots", HOST))
        .add_query_param("date", date)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_booking_stores_meeting_and_notifies_host() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/bookings")
        .json(&json!({
            "hostId": HOST,
            "guestId": GUEST,
            "date": "2025-06-02",
            "startTime": "2025-06-02T10:00:00Z",
            "title": "Coffee chat",
            "description": "Catch up"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: CreateBookingResponse = response.json();
    assert!(body.notified);
    assert_eq!(body.meeting.host_id, HOST);
    assert_eq!(body.meeting.guest_id, GUEST);
    assert_eq!(body.meeting.status, MeetingStatus::Scheduled);
    assert_eq!(body.meeting.description.as_deref(), Some("Catch up"));

    assert_eq!(ctx.meetings.len().await, 1);
    assert_eq!(ctx.notifications.len().await, 1);

    let listed: Vec<Meeting> = server
        .get(&format!("/api/users/{}/meetings", GUEST))
        .await
        .json();
    assert_eq!(listed, vec![body.meeting]);
}

#[tokio::test]
async fn test_create_booking_with_unknown_start_time() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/bookings")
        .json(&json!({
            "hostId": HOST,
            "guestId": GUEST,
            "date": "2025-06-02",
            "startTime": "2025-06-02T10:30:00Z",
            "title": "Coffee chat"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(ctx.meetings.is_empty().await);
}

#[rstest]
#[case::self_booking(json!(HOST), "Coffee chat")]
#[case::missing_guest(json!(null), "Coffee chat")]
#[case::blank_title(json!(GUEST), "   ")]
#[tokio::test]
async fn test_create_booking_validation(
    #[case] guest_id: serde_json::Value,
    #[case] title: &str,
) {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/bookings")
        .json(&json!({
            "hostId": HOST,
            "guestId": guest_id,
            "date": "2025-06-02",
            "startTime": "2025-06-02T10:00:00Z",
            "title": title
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.meetings.is_empty().await);
    assert!(ctx.notifications.is_empty().await);
}

#[tokio::test]
async fn test_list_meetings_for_user_without_meetings() {
    let server = TestContext::new().server();

    let meetings: Vec<Meeting> = server.get("/api/users/123/meetings").await.json();

    assert!(meetings.is_empty());
}
