//! Shennong error types

use std::time::Duration;

use crate::validate::{SchemaStage, Violation};

/// Shennong error types
///
/// Every variant is terminal for the request that produced it — there is
/// no retry loop anywhere in the pipeline. [`http_status()`](Self::http_status)
/// gives the status the response formatter uses;
/// [`public_message()`](Self::public_message) gives the caller-facing body
/// text, which deliberately omits validator diagnostics and other internals.
#[derive(Debug, thiserror::Error)]
pub enum ShennongError {
    // Client input errors
    #[error("missing `name` query parameter")]
    MissingName,

    // Generation service errors
    #[error("generation request failed: {0}")]
    Generation(String),

    #[error("generation request timed out after {0:?}")]
    GenerationTimeout(Duration),

    /// The generator explicitly flagged the search term as not a real item.
    #[error("generator flagged invalid item: {0}")]
    InvalidItem(String),

    #[error("no parsable JSON object in model reply: {0}")]
    UnparsableReply(String),

    // Domain rejections
    #[error("ingredient category {category:?} matched non-consumable term {term:?}")]
    NotConsumable { category: String, term: &'static str },

    #[error("{stage} schema validation failed ({} violation(s))", .violations.len())]
    SchemaViolation {
        stage: SchemaStage,
        violations: Vec<Violation>,
    },

    // Persistence errors
    #[error("record with id {0} already exists")]
    Conflict(String),

    #[error("store error: {0}")]
    Store(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ShennongError {
    /// HTTP status this error surfaces as.
    ///
    /// Follows the fixed taxonomy: client input → 400, semantic rejection
    /// (invalid or non-consumable item) → 404, generation service
    /// unavailable → 502, everything else (parse, schema, persistence,
    /// configuration) → 500.
    pub fn http_status(&self) -> u16 {
        match self {
            ShennongError::MissingName => 400,
            ShennongError::InvalidItem(_) | ShennongError::NotConsumable { .. } => 404,
            ShennongError::Generation(_) | ShennongError::GenerationTimeout(_) => 502,
            ShennongError::UnparsableReply(_)
            | ShennongError::SchemaViolation { .. }
            | ShennongError::Conflict(_)
            | ShennongError::Store(_)
            | ShennongError::Json(_)
            | ShennongError::Configuration(_) => 500,
        }
    }

    /// Caller-facing message for the `{error}` response body.
    ///
    /// Schema violations and store details are logged, never returned.
    pub fn public_message(&self) -> &'static str {
        match self {
            ShennongError::MissingName => "missing `name` query parameter",
            ShennongError::InvalidItem(_) => "invalid item",
            ShennongError::NotConsumable { .. } => "item is not consumable",
            ShennongError::Generation(_) | ShennongError::GenerationTimeout(_) => {
                "generation service unavailable"
            }
            ShennongError::UnparsableReply(_) => "failed to parse generated item",
            ShennongError::SchemaViolation { .. } => "generated item failed validation",
            ShennongError::Conflict(_) | ShennongError::Store(_) => "failed to persist item",
            ShennongError::Json(_) | ShennongError::Configuration(_) => "internal error",
        }
    }
}

/// Result type alias for Shennong operations
pub type Result<T> = std::result::Result<T, ShennongError>;
