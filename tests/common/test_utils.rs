use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use genai_inference::{
    config::LlmConfig,
    genai::{MockGenerator, TextGenerator},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt; // for `oneshot`

/// Mock generator with a fixed seed and no simulated latency
pub fn instant_mock(seed: u64) -> MockGenerator {
    MockGenerator::with_seed(seed).with_latency(Duration::ZERO, Duration::ZERO)
}

/// Build the full router around the given generator
pub fn create_test_app(generator: Arc<dyn TextGenerator>) -> Router {
    server::router(AppState::new(generator))
}

/// LLM settings pointing at a local mock endpoint
pub fn create_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "gpt-4o-mini".to_string(),
        system_prompt: Some("Answer in one sentence.".to_string()),
    }
}

/// POST a raw body to /generate and return the status with the parsed JSON body
pub async fn post_generate(app: Router, content_type: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/generate")
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// POST a JSON value to /generate
pub async fn post_generate_json(app: Router, body: &Value) -> (StatusCode, Value) {
    post_generate(app, "application/json", body.to_string()).await
}
