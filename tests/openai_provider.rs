use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use sehlabot::services::ai::openai::OpenAiProvider;
use sehlabot::services::ai::{LlmProvider, Message};

#[derive(Clone)]
struct FakeApi {
    status: StatusCode,
    response: Value,
    delay: Duration,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn completions(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    api.seen.lock().unwrap().push((auth, body));
    tokio::time::sleep(api.delay).await;
    (api.status, Json(api.response.clone()))
}

/// Serve a fake chat-completions endpoint on an ephemeral port and return its URL.
async fn spawn_fake_api(api: FakeApi) -> String {
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1/chat/completions")
}

fn fake(status: StatusCode, response: Value) -> FakeApi {
    FakeApi {
        status,
        response,
        delay: Duration::ZERO,
        seen: Arc::new(Mutex::new(Vec::new())),
    }
}

fn provider(url: String, timeout: Duration) -> OpenAiProvider {
    OpenAiProvider::new(
        "sk-test".to_string(),
        "gpt-3.5-turbo".to_string(),
        url,
        timeout,
    )
    .unwrap()
}

#[tokio::test]
async fn test_sends_system_then_user_and_returns_first_choice() {
    let api = fake(
        StatusCode::OK,
        json!({
            "choices": [
                { "message": { "role": "assistant", "content": "first" } },
                { "message": { "role": "assistant", "content": "second" } }
            ]
        }),
    );
    let seen = Arc::clone(&api.seen);
    let url = spawn_fake_api(api).await;

    let reply = provider(url, Duration::from_secs(5))
        .chat(
            "You are a helpful assistant.",
            &[Message::user("tell me a joke")],
        )
        .await
        .unwrap();
    assert_eq!(reply, "first");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(
        body["messages"],
        json!([
            { "role": "system", "content": "You are a helpful assistant." },
            { "role": "user", "content": "tell me a joke" }
        ])
    );
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let api = fake(
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": "invalid api key" } }),
    );
    let url = spawn_fake_api(api).await;

    let err = provider(url, Duration::from_secs(5))
        .chat("system", &[Message::user("hi")])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_missing_content_is_error() {
    let api = fake(StatusCode::OK, json!({ "choices": [] }));
    let url = spawn_fake_api(api).await;

    let result = provider(url, Duration::from_secs(5))
        .chat("system", &[Message::user("hi")])
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_timeout_is_error() {
    let mut api = fake(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "content": "late" } }] }),
    );
    api.delay = Duration::from_secs(2);
    let url = spawn_fake_api(api).await;

    let result = provider(url, Duration::from_millis(200))
        .chat("system", &[Message::user("hi")])
        .await;
    assert!(result.is_err());
}
