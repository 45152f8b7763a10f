//! Wiremock integration tests for [`ChatCompletionGenerator`].

use std::time::Duration;

use shennong::{ChatCompletionGenerator, GeneratorConfig, ItemGenerator, ShennongError};

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Match, Mock, MockServer, ResponseTemplate};

/// Chat-completions response wrapping the given reply text.
fn completion_json(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": content
            }
        }]
    })
}

fn generator_with_mock(mock_url: &str) -> ChatCompletionGenerator {
    ChatCompletionGenerator::new(Some("test-key"), GeneratorConfig::new("test-vendor/test-model"))
        .base_url(mock_url)
}

#[tokio::test]
async fn generate_returns_the_reply_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(body_partial_json(
            serde_json::json!({"model": "test-vendor/test-model"}),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_json(r#"{"ItemType":"nutrient"}"#)),
        )
        .mount(&server)
        .await;

    let generator = generator_with_mock(&server.uri());
    let reply = generator.generate("iron").await.expect("generate should succeed");

    assert_eq!(reply, r#"{"ItemType":"nutrient"}"#);
}

#[tokio::test]
async fn keyed_generator_sends_auth_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_json("{}")))
        .expect(1)
        .mount(&server)
        .await;

    generator_with_mock(&server.uri())
        .generate("iron")
        .await
        .expect("keyed generate should succeed");
}

/// Matcher that asserts the `Authorization` header is absent.
struct NoAuthHeader;

impl Match for NoAuthHeader {
    fn matches(&self, request: &wiremock::Request) -> bool {
        !request.headers.contains_key("Authorization")
    }
}

#[tokio::test]
async fn keyless_generator_sends_no_auth_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_json("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let generator =
        ChatCompletionGenerator::new(None::<String>, GeneratorConfig::new("test-vendor/test-model"))
            .base_url(server.uri());
    generator
        .generate("iron")
        .await
        .expect("keyless generate should succeed");
}

#[tokio::test]
async fn prompt_carries_the_search_term() {
    let server = MockServer::start().await;

    /// Matcher: some message content mentions the term.
    struct MentionsTerm(&'static str);

    impl Match for MentionsTerm {
        fn matches(&self, request: &wiremock::Request) -> bool {
            String::from_utf8_lossy(&request.body).contains(self.0)
        }
    }

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(MentionsTerm("ginger"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_json("{}")))
        .expect(1)
        .mount(&server)
        .await;

    generator_with_mock(&server.uri())
        .generate("ginger")
        .await
        .expect("generate should succeed");
}

#[tokio::test]
async fn api_error_status_surfaces_as_generation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = generator_with_mock(&server.uri())
        .generate("iron")
        .await
        .unwrap_err();

    assert!(matches!(err, ShennongError::Generation(_)));
    assert_eq!(err.http_status(), 502);
}

#[tokio::test]
async fn malformed_completion_body_is_a_generation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = generator_with_mock(&server.uri())
        .generate("iron")
        .await
        .unwrap_err();

    assert!(matches!(err, ShennongError::Generation(_)));
}

#[tokio::test]
async fn empty_choices_is_a_generation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let err = generator_with_mock(&server.uri())
        .generate("iron")
        .await
        .unwrap_err();

    assert!(matches!(err, ShennongError::Generation(_)));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_json("{}"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let generator = ChatCompletionGenerator::new(
        Some("test-key"),
        GeneratorConfig::new("test-vendor/test-model").timeout(Duration::from_millis(100)),
    )
    .base_url(server.uri());

    let err = generator.generate("iron").await.unwrap_err();

    assert!(matches!(err, ShennongError::GenerationTimeout(_)));
    assert_eq!(err.http_status(), 502);
}
