//! Telemetry metric name constants.
//!
//! Centralised metric names for shennong operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `shennong_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `outcome` — request outcome: "found", "generated", or "error"
//! - `stage` — validation stage: "generated" or "stored"
//! - `status` — collaborator call outcome: "ok" or "error"

/// Total lookup requests handled.
///
/// Labels: `outcome` ("found" | "generated" | "error").
pub const REQUESTS_TOTAL: &str = "shennong_requests_total";

/// Total lookup cache hits.
pub const CACHE_HITS_TOTAL: &str = "shennong_cache_hits_total";

/// Total lookup cache misses.
pub const CACHE_MISSES_TOTAL: &str = "shennong_cache_misses_total";

/// Total generation calls dispatched to the model.
///
/// Labels: `status` ("ok" | "error").
pub const GENERATIONS_TOTAL: &str = "shennong_generations_total";

/// Generation call duration in seconds.
pub const GENERATION_DURATION_SECONDS: &str = "shennong_generation_duration_seconds";

/// Total schema validation failures.
///
/// Labels: `stage` ("generated" | "stored").
pub const VALIDATION_FAILURES_TOTAL: &str = "shennong_validation_failures_total";

/// Total items rejected by the consumability classifier.
pub const REJECTED_ITEMS_TOTAL: &str = "shennong_rejected_items_total";
