//! Item generation: the provider seam, the prompt template, and reply
//! parsing.
//!
//! [`ItemGenerator`] returns the model's raw textual reply; the
//! orchestrator then runs the reply through [`reply_signals_invalid`]
//! (cheap marker check, before any parsing) and [`parse_reply`]
//! (JSON-span extraction). Keeping the parsing out of the trait lets
//! test generators return canned text and still exercise the real
//! pipeline.

mod openrouter;

pub use openrouter::ChatCompletionGenerator;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::{Result, ShennongError};

/// Fixed system instruction sent with every generation request.
pub const SYSTEM_PROMPT: &str = "You are a reference for food ingredients and nutrients, \
covering both modern nutrition and traditional Chinese medicine. Reply with a single JSON \
object and nothing else. For a food ingredient use ItemType \"ingredient\" with a \
multilingual Name (English required; Chinese and Spanish when known), ThermalNature \
(one of Yin-Cold, Yin-Cool, Neutral, Yang-Warm, Yang-Hot), Category, and the usual \
descriptive fields; include a TraditionalMedicine object with its Functions. For a \
nutrient use ItemType \"nutrient\" with Name, NutrientType (vitamin, mineral, or other), \
Functions, Sources, and RecommendedIntake. Do not invent properties outside the \
documented set. If the requested item is not a real food ingredient or nutrient, reply \
with {\"error\": \"Invalid item\"}.";

/// User prompt for one generation call, parameterized only by the search
/// term.
pub fn user_prompt(term: &str) -> String {
    format!("Provide the nutritional and traditional-medicine record for \"{term}\".")
}

/// Provider for item-record generation.
///
/// Implementations send one structured request to an external generation
/// service and return the raw reply text. The call must be bounded — see
/// [`GeneratorConfig::timeout`].
#[async_trait]
pub trait ItemGenerator: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Generate the raw reply for a search term.
    async fn generate(&self, term: &str) -> Result<String>;
}

/// Configuration for generation calls.
///
/// ```rust
/// # use shennong::GeneratorConfig;
/// let config = GeneratorConfig::new("anthropic/claude-sonnet-4").temperature(0.2);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Model to request.
    pub model: String,
    /// Completion length bound. Default: 1024.
    pub max_tokens: usize,
    /// Fixed sampling temperature. Default: 0.4.
    pub temperature: f32,
    /// Bound on the whole generation call. Default: 10 s.
    pub timeout: Duration,
}

impl GeneratorConfig {
    /// Create a config for the given model with default sampling settings.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: 1024,
            temperature: 0.4,
            timeout: Duration::from_secs(10),
        }
    }

    /// Set the completion length bound.
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the generation call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Whether the reply carries the generator's explicit invalid-item marker.
///
/// A literal `"error":` anywhere in the lowercased reply short-circuits
/// the pipeline to a not-found outcome. This is a cheap signal checked
/// BEFORE any parse attempt, not a schema check.
pub fn reply_signals_invalid(reply: &str) -> bool {
    reply.to_lowercase().contains("\"error\":")
}

/// Extract the JSON span from a reply: first `{` through last `}`.
///
/// Tolerates leading/trailing prose and code fencing. Missing braces are
/// an unparsable-reply error.
pub fn extract_json_span(reply: &str) -> Result<&str> {
    let start = reply
        .find('{')
        .ok_or_else(|| ShennongError::UnparsableReply("no opening brace".into()))?;
    let end = reply
        .rfind('}')
        .filter(|end| *end > start)
        .ok_or_else(|| ShennongError::UnparsableReply("no closing brace".into()))?;
    Ok(&reply[start..=end])
}

/// Parse a reply into the generated record's JSON value.
pub fn parse_reply(reply: &str) -> Result<Value> {
    let span = extract_json_span(reply)?;
    serde_json::from_str(span).map_err(|e| ShennongError::UnparsableReply(e.to_string()))
}
