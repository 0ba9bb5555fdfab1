use std::sync::Arc;

use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::{gpt::PromptModel, ApiClient, OTHER_MESSAGE};
use crate::{
    pages::Message,
    session::{MemoryStore, TokenStore},
};

pub async fn setup(tokens: MemoryStore) -> (MockServer, ApiClient, Arc<MemoryStore>) {
    let server = MockServer::start().await;
    let tokens = Arc::new(tokens);
    let client = ApiClient::new(&server.uri(), tokens.clone());
    (server, client, tokens)
}

pub fn post_json(id: u64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "content": "**hello**",
        "created_at": "2024-06-01T00:00:00.000Z",
    })
}

fn prompt(message: &str) -> PromptModel {
    PromptModel {
        message: Message(message.into()),
    }
}

#[test]
fn test_url_joins_origin() {
    let client = ApiClient::new("http://localhost:3000/", Arc::new(MemoryStore::default()));
    assert_eq!(client.url("posts/1"), "http://localhost:3000/posts/1");
    assert_eq!(crate::url!(client, "users/{}", 7), "http://localhost:3000/users/7");
}

#[tokio::test]
async fn test_token_is_attached() {
    let (server, client, _) = setup(MemoryStore::with_token("secret")).await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "posts": [] })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.is_signed_in());
    assert_eq!(client.get_posts().await, Ok(vec![]));
}

#[tokio::test]
async fn test_no_token_no_header() {
    let (server, client, _) = setup(MemoryStore::default()).await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "posts": [] })))
        .mount(&server)
        .await;

    assert!(!client.is_signed_in());
    client.get_posts().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_gpt_response() {
    let (server, client, _) = setup(MemoryStore::default()).await;

    Mock::given(method("POST"))
        .and(path("/gpt_response"))
        .and(body_json(json!({ "message": "fix my code" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "done" })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client.gpt_response(prompt("fix my code")).await.unwrap();
    assert_eq!(reply.to_string(), "done");
}

#[tokio::test]
async fn test_gpt_failure_is_generic() {
    let (server, client, _) = setup(MemoryStore::default()).await;

    Mock::given(method("POST"))
        .and(path("/gpt_response"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client.gpt_response(prompt("hi")).await.unwrap_err();
    assert_eq!(err.to_string(), OTHER_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_backend() {
    let tokens = Arc::new(MemoryStore::default());
    let client = ApiClient::new("http://127.0.0.1:9", tokens.clone());

    let err = client.get_posts().await.unwrap_err();
    assert_eq!(err.to_string(), OTHER_MESSAGE);
    assert_eq!(tokens.load(), None);
}

#[tokio::test]
async fn test_garbage_body_is_generic() {
    let (server, client, _) = setup(MemoryStore::default()).await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    assert_eq!(
        client.get_posts().await.unwrap_err().to_string(),
        OTHER_MESSAGE
    );
}
