//! OpenAI provider tests against a mocked completions API.

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vidsight_ai_client::{
    ChatTurn, CompletionError, CompletionProvider, OpenAiConfig, OpenAiProvider,
};

fn provider_for(server: &MockServer) -> OpenAiProvider {
    let config = OpenAiConfig::new("sk-test")
        .with_base_url(server.uri())
        .with_model("gpt-4o-mini");
    OpenAiProvider::new(config).expect("provider")
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
}

#[tokio::test]
async fn returns_first_choice_and_prepends_goal_turn() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [
                { "role": "system", "content": "You are a helpful assistant." },
                { "role": "user", "content": "Hello" }
            ],
            "n": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hi there")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .complete("You are a helpful assistant.", &[ChatTurn::user("Hello")])
        .await
        .expect("completion");

    assert_eq!(result, "Hi there");
}

#[tokio::test]
async fn retries_once_on_rate_limit_then_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .expect(2)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .complete("goal", &[ChatTurn::user("Hello")])
        .await
        .expect_err("should be rate limited");

    assert!(matches!(err, CompletionError::RateLimited));
}

#[tokio::test]
async fn rate_limit_then_success_recovers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Recovered")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .complete("goal", &[ChatTurn::user("Hello")])
        .await
        .expect("completion after retry");

    assert_eq!(result, "Recovered");
}

#[tokio::test]
async fn context_length_error_maps_to_context_too_long() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "This model's maximum context length is 4097 tokens."
            }
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .complete("goal", &[ChatTurn::user("a very long prompt")])
        .await
        .expect_err("should fail");

    assert!(matches!(err, CompletionError::ContextTooLong));
}

#[tokio::test]
async fn other_bad_request_maps_to_invalid_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "Unknown model" }
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .complete("goal", &[ChatTurn::user("Hello")])
        .await
        .expect_err("should fail");

    match err {
        CompletionError::InvalidRequest(message) => assert_eq!(message, "Unknown model"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider
        .complete("goal", &[ChatTurn::user("Hello")])
        .await
        .expect_err("should fail");

    assert!(matches!(err, CompletionError::Unauthorized(_)));
}

#[tokio::test]
async fn empty_choice_set_yields_placeholder_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .complete("goal", &[ChatTurn::user("Hello")])
        .await
        .expect("placeholder, not an error");

    assert_eq!(result, "A?");
}
