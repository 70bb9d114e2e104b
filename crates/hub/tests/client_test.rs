use std::sync::Arc;

use chrono::Utc;
use pretty_assertions::assert_eq;
use serde_json::json;
use slotcast_core::{
    errors::BookingError,
    mock::MockNotifier,
    models::notification::{NewNotification, Notification, NotificationKind},
    ports::NotificationSink,
};
use slotcast_hub::{CastingNotificationSink, HubClient, HubConfig, HubError};
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile_json(fid: u64, username: &str) -> serde_json::Value {
    json!({
        "fid": fid,
        "username": username,
        "displayName": format!("{} display", username),
        "pfp": { "url": format!("https://img.example/{}.png", username) },
        "profile": { "bio": "building things" },
        "followerCount": 10,
        "followingCount": 3
    })
}

fn client_for(server: &MockServer, api_key: Option<&str>) -> HubClient {
    HubClient::new(HubConfig::new(server.uri(), api_key.map(str::to_string)).unwrap())
}

#[tokio::test]
async fn test_user_by_fid_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(query_param("fid", "42"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "result": { "user": profile_json(42, "alice") } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let profile = client_for(&server, Some("secret"))
        .user_by_fid(42)
        .await
        .unwrap();

    assert_eq!(profile.fid, 42);
    assert_eq!(profile.display_name, "alice display");
    assert_eq!(profile.follower_count, Some(10));
}

#[tokio::test]
async fn test_search_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user-search"))
        .and(query_param("q", "ali"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "users": [profile_json(42, "alice"), profile_json(43, "alicia")] }
        })))
        .mount(&server)
        .await;

    let users = client_for(&server, None).search_users("ali").await.unwrap();

    let fids: Vec<u64> = users.iter().map(|u| u.fid).collect();
    assert_eq!(fids, vec![42, 43]);
}

#[tokio::test]
async fn test_trending_users_passes_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user-search"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "users": [profile_json(1, "dwr")] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let users = client_for(&server, None).trending_users(5).await.unwrap();

    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such user"))
        .mount(&server)
        .await;

    let err = client_for(&server, None).user_by_fid(7).await.unwrap_err();

    match &err {
        HubError::Status { status, body } => {
            assert_eq!(*status, 404);
            assert_eq!(body, "no such user");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(BookingError::from(err).is_fetch());
}

#[tokio::test]
async fn test_send_cast_posts_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/casts"))
        .and(body_partial_json(json!({ "text": "hello", "embeds": [] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": { "cast": {} } })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, Some("secret"))
        .send_cast("hello", None)
        .await
        .unwrap();
}

fn booking_request() -> NewNotification {
    NewNotification {
        recipient_id: 42,
        sender_id: 99,
        kind: NotificationKind::BookingRequest,
        meeting_id: Some(Uuid::new_v4()),
        message: "99 wants to book a meeting with you".to_string(),
    }
}

fn stored_notifier() -> MockNotifier {
    let mut notifier = MockNotifier::new();
    notifier.expect_notify().times(1).returning(|new| {
        Ok(Notification {
            id: Uuid::new_v4(),
            recipient_id: new.recipient_id,
            sender_id: new.sender_id,
            kind: new.kind,
            meeting_id: new.meeting_id,
            message: new.message,
            read: false,
            created_at: Utc::now(),
        })
    });
    notifier
}

#[tokio::test]
async fn test_casting_sink_mirrors_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/casts"))
        .and(body_partial_json(
            json!({ "text": "99 wants to book a meeting with you" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    let sink = CastingNotificationSink::new(Arc::new(stored_notifier()), client_for(&server, None));

    let notification = sink.notify(booking_request()).await.unwrap();

    assert_eq!(notification.recipient_id, 42);
}

#[tokio::test]
async fn test_casting_sink_ignores_hub_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/casts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let sink = CastingNotificationSink::new(Arc::new(stored_notifier()), client_for(&server, None));

    let notification = sink.notify(booking_request()).await.unwrap();

    assert!(!notification.read);
}

#[tokio::test]
async fn test_casting_sink_skips_cast_when_store_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/casts"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify()
        .returning(|_| Err(BookingError::Fetch(eyre::eyre!("store offline"))));
    let sink = CastingNotificationSink::new(Arc::new(notifier), client_for(&server, None));

    assert!(sink.notify(booking_request()).await.unwrap_err().is_fetch());
}
