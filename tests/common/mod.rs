#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue};
use docup::application::routing_store::RoutingStore;
use docup::domain::entities::IssueRouting;
use docup::infrastructure::http::{GitHubClient, MattermostClient};
use docup::state::AppState;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SITE_URL: &str = "https://chat.example.com";

pub fn create_test_state(
    mattermost: &MockServer,
    github: &MockServer,
    routing: IssueRouting,
) -> AppState {
    let chat = Arc::new(MattermostClient::new(&mattermost.uri(), SITE_URL, "mm-token").unwrap());
    let tracker = Arc::new(GitHubClient::new(&github.uri(), "gh-token").unwrap());

    AppState::new(chat, tracker, RoutingStore::new(routing))
}

pub fn user_header(user_id: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("mattermost-user-id"),
        HeaderValue::from_static(user_id),
    )
}

pub async fn mount_user(server: &MockServer, id: &str, username: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v4/users/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "username": username,
            "email": format!("{username}@example.com")
        })))
        .mount(server)
        .await;
}

pub async fn mount_post(server: &MockServer, id: &str, channel_id: &str, root_id: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v4/posts/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "channel_id": channel_id,
            "root_id": root_id,
            "message": "How do I configure SAML with Okta?"
        })))
        .mount(server)
        .await;
}

pub async fn mount_create_post(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/api/v4/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "R1",
            "channel_id": "C1"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub async fn mount_create_issue(server: &MockServer, owner: &str, repo: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(format!("/repos/{owner}/{repo}/issues")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 42,
            "html_url": format!("https://github.com/{owner}/{repo}/issues/42")
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Fails any issue creation attempt when the server is dropped.
pub async fn forbid_issue_creation(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// JSON bodies of every request the mock server received on `path`.
pub async fn received_json(server: &MockServer, request_path: &str) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.url.path() == request_path)
        .map(|r| r.body_json::<serde_json::Value>().unwrap())
        .collect()
}
