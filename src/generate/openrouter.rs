//! Chat-completions generator over an OpenAI-style HTTP API.

use std::time::Instant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::telemetry;
use crate::{Result, ShennongError};

use super::{GeneratorConfig, ItemGenerator, SYSTEM_PROMPT, user_prompt};

/// Generator that posts one chat-completions request per call.
///
/// Sends the fixed system instruction plus the per-call user prompt to
/// `{base}/api/v1/chat/completions` with bounded `max_tokens`, fixed
/// temperature, and a hard timeout covering the entire call.
///
/// # Example
///
/// ```ignore
/// use shennong::{ChatCompletionGenerator, GeneratorConfig};
///
/// let generator = ChatCompletionGenerator::new(
///     Some("sk-or-your-key"),
///     GeneratorConfig::new("anthropic/claude-sonnet-4"),
/// );
/// ```
pub struct ChatCompletionGenerator {
    api_key: Option<String>,
    config: GeneratorConfig,
    /// Shared HTTP client.
    http_client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl ChatCompletionGenerator {
    /// Create a generator with its own HTTP client.
    pub fn new(api_key: Option<impl Into<String>>, config: GeneratorConfig) -> Self {
        Self::with_http_client(api_key, config, reqwest::Client::new())
    }

    /// Create a generator sharing an existing HTTP client.
    ///
    /// Prefer this over [`new`](Self::new) when collaborators should
    /// share a connection pool.
    pub fn with_http_client(
        api_key: Option<impl Into<String>>,
        config: GeneratorConfig,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            api_key: api_key.map(|k| k.into()),
            config,
            http_client,
            base_url: "https://openrouter.ai".to_string(),
        }
    }

    /// Override the base URL (testing with wiremock).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl ItemGenerator for ChatCompletionGenerator {
    fn name(&self) -> &str {
        "openrouter"
    }

    #[instrument(name = "generate.chat", skip(self, term), fields(model = %self.config.model))]
    async fn generate(&self, term: &str) -> Result<String> {
        let url = format!("{}/api/v1/chat/completions", self.base_url);
        let prompt = user_prompt(term);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let mut request = self.http_client.post(url).json(&body);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let started = Instant::now();
        // One bound over send + status check + body read: the caller sees
        // either a completion or a timeout, never a half-read response.
        let call = async {
            let response = request
                .send()
                .await
                .map_err(|e| ShennongError::Generation(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".into());
                return Err(ShennongError::Generation(format!(
                    "status {status}: {message}"
                )));
            }

            response
                .json::<ChatCompletion>()
                .await
                .map_err(|e| ShennongError::Generation(e.to_string()))
        };

        let completion = match tokio::time::timeout(self.config.timeout, call).await {
            Ok(Ok(completion)) => completion,
            Ok(Err(e)) => {
                metrics::counter!(telemetry::GENERATIONS_TOTAL, "status" => "error").increment(1);
                return Err(e);
            }
            Err(_) => {
                metrics::counter!(telemetry::GENERATIONS_TOTAL, "status" => "error").increment(1);
                return Err(ShennongError::GenerationTimeout(self.config.timeout));
            }
        };

        metrics::histogram!(telemetry::GENERATION_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ShennongError::Generation("model returned no choices".into()))?;

        metrics::counter!(telemetry::GENERATIONS_TOTAL, "status" => "ok").increment(1);
        Ok(content)
    }
}
