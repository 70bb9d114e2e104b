use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use slotcast_hub::models::Profile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::TestContext;

fn profile_json(fid: u64, username: &str) -> serde_json::Value {
    json!({
        "fid": fid,
        "username": username,
        "displayName": username.to_uppercase(),
        "pfp": { "url": format!("https://img.example/{}.png", username) }
    })
}

#[tokio::test]
async fn test_profiles_without_hub_are_not_found() {
    let server = TestContext::new().server();

    server
        .get("/api/profiles/42")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/api/profiles")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_profile_from_hub() {
    let hub = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(query_param("fid", "42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "result": { "user": profile_json(42, "alice") } })),
        )
        .mount(&hub)
        .await;
    let server = TestContext::new().with_hub(hub.uri()).server();

    let profile: Profile = server.get("/api/profiles/42").await.json();

    assert_eq!(profile.fid, 42);
    assert_eq!(profile.display_name, "ALICE");
}

#[tokio::test]
async fn test_search_profiles_by_username() {
    let hub = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user-search"))
        .and(query_param("q", "bo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "users": [profile_json(1, "bob"), profile_json(2, "bobby")] }
        })))
        .expect(1)
        .mount(&hub)
        .await;
    let server = TestContext::new().with_hub(hub.uri()).server();

    let profiles: Vec<Profile> = server
        .get("/api/profiles")
        .add_query_param("q", "bo")
        .await
        .json();

    let names: Vec<_> = profiles.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, vec!["bob", "bobby"]);
}

#[tokio::test]
async fn test_empty_search_lists_trending() {
    let hub = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user-search"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "users": [profile_json(3, "carol")] }
        })))
        .expect(1)
        .mount(&hub)
        .await;
    let server = TestContext::new().with_hub(hub.uri()).server();

    let profiles: Vec<Profile> = server.get("/api/profiles").await.json();

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].username, "carol");
}

#[tokio::test]
async fn test_hub_failure_is_bad_gateway() {
    let hub = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&hub)
        .await;
    let server = TestContext::new().with_hub(hub.uri()).server();

    server
        .get("/api/profiles/42")
        .await
        .assert_status(StatusCode::BAD_GATEWAY);
}
