//! The lookup orchestrator.
//!
//! One [`LookupService`] run per request, strictly sequential:
//! cache check → store lookup → generate → parse → marker check →
//! generation-stage validation → consumability check → system-field
//! assignment → storage-stage validation → conditional persist → cache
//! set → respond. Any step's failure is terminal; there are no retries,
//! and no rollback is needed because nothing before the persist has a
//! side effect requiring undo.
//!
//! Instances of the hosting process may run many lookups concurrently;
//! they share only the injected cache (incidental same-process reuse,
//! last-write-wins) and the duplicate-name race described in the
//! [store docs](crate::store) is preserved.

use std::sync::Arc;

use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::cache::LookupCache;
use crate::generate::{self, ItemGenerator};
use crate::normalize::{fingerprint, normalize};
use crate::store::ItemStore;
use crate::telemetry;
use crate::types::{ApiResponse, GeneratedItem, StoredItem};
use crate::validate::{self, SchemaStage};
use crate::{Result, ShennongError, classify};

/// A resolved item and how it was obtained.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub item: StoredItem,
    /// `true` when the item was generated and persisted by this request,
    /// `false` for a cache or store hit.
    pub freshly_generated: bool,
}

/// The lookup-or-generate service.
pub struct LookupService {
    store: Arc<dyn ItemStore>,
    generator: Arc<dyn ItemGenerator>,
    cache: LookupCache,
}

impl LookupService {
    pub(crate) fn new(
        store: Arc<dyn ItemStore>,
        generator: Arc<dyn ItemGenerator>,
        cache: LookupCache,
    ) -> Self {
        Self {
            store,
            generator,
            cache,
        }
    }

    /// Resolve an item by search term.
    ///
    /// The normalized form of `name` (trimmed, lowercased) keys the
    /// cache, the store lookup, and the persisted `NameLowercase` field;
    /// the generator sees the trimmed original.
    #[instrument(name = "shennong.lookup", skip(self))]
    pub async fn lookup(&self, name: &str) -> Result<Resolution> {
        let key = normalize(name);
        if key.is_empty() {
            return Err(ShennongError::MissingName);
        }
        let fp = fingerprint(&key);

        if let Some(item) = self.cache.get(fp).await {
            debug!(key = %key, "cache hit");
            return Ok(Resolution {
                item,
                freshly_generated: false,
            });
        }

        if let Some(item) = self.store.find_by_name(&key).await? {
            debug!(key = %key, store = self.store.name(), "store hit");
            self.cache.insert(fp, item.clone()).await;
            return Ok(Resolution {
                item,
                freshly_generated: false,
            });
        }

        let reply = self.generator.generate(name.trim()).await?;

        // Marker check comes before any parse attempt.
        if generate::reply_signals_invalid(&reply) {
            return Err(ShennongError::InvalidItem(key));
        }

        let value = generate::parse_reply(&reply)?;

        let violations = validate::validate_generated(&value);
        if !violations.is_empty() {
            metrics::counter!(telemetry::VALIDATION_FAILURES_TOTAL, "stage" => "generated")
                .increment(1);
            return Err(ShennongError::SchemaViolation {
                stage: SchemaStage::Generated,
                violations,
            });
        }
        let item: GeneratedItem = serde_json::from_value(value)?;

        if let GeneratedItem::Ingredient(ref ingredient) = item {
            if let Some(term) = classify::non_consumable_match(ingredient.category.as_deref()) {
                metrics::counter!(telemetry::REJECTED_ITEMS_TOTAL).increment(1);
                return Err(ShennongError::NotConsumable {
                    category: ingredient.category.clone().unwrap_or_default(),
                    term,
                });
            }
        }

        let stored = StoredItem::assign(item, key.clone());
        let stored_value = serde_json::to_value(&stored)?;
        let violations = validate::validate_stored(&stored_value);
        if !violations.is_empty() {
            metrics::counter!(telemetry::VALIDATION_FAILURES_TOTAL, "stage" => "stored")
                .increment(1);
            return Err(ShennongError::SchemaViolation {
                stage: SchemaStage::Stored,
                violations,
            });
        }

        self.store.put_new(&stored).await?;
        self.cache.insert(fp, stored.clone()).await;
        debug!(key = %key, id = %stored.id, "generated and persisted");

        Ok(Resolution {
            item: stored,
            freshly_generated: true,
        })
    }

    /// Handle one request: the outermost layer over [`lookup`](Self::lookup).
    ///
    /// Maps every outcome to its status/body pair, attaches the
    /// permissive CORS headers, and logs a correlation id alongside
    /// every failure. Validator diagnostics are logged here, never
    /// returned to the caller.
    pub async fn handle(&self, query: Option<&str>) -> ApiResponse {
        let correlation_id = Uuid::new_v4();

        let name = match query {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                let err = ShennongError::MissingName;
                warn!(%correlation_id, error = %err, "rejected request");
                metrics::counter!(telemetry::REQUESTS_TOTAL, "outcome" => "error").increment(1);
                return ApiResponse::error(err.http_status(), err.public_message());
            }
        };

        match self.lookup(name).await {
            Ok(resolution) => match serde_json::to_value(&resolution.item) {
                Ok(item) => {
                    if resolution.freshly_generated {
                        metrics::counter!(telemetry::REQUESTS_TOTAL, "outcome" => "generated")
                            .increment(1);
                        ApiResponse::generated(item)
                    } else {
                        metrics::counter!(telemetry::REQUESTS_TOTAL, "outcome" => "found")
                            .increment(1);
                        ApiResponse::found(item)
                    }
                }
                Err(e) => {
                    warn!(%correlation_id, error = %e, "failed to serialize resolved item");
                    metrics::counter!(telemetry::REQUESTS_TOTAL, "outcome" => "error").increment(1);
                    ApiResponse::error(500, "internal error")
                }
            },
            Err(err) => {
                warn!(%correlation_id, error = %err, status = err.http_status(), "lookup failed");
                if let ShennongError::SchemaViolation {
                    stage,
                    ref violations,
                } = err
                {
                    for violation in violations {
                        debug!(%correlation_id, %stage, %violation, "schema violation");
                    }
                }
                metrics::counter!(telemetry::REQUESTS_TOTAL, "outcome" => "error").increment(1);
                ApiResponse::error(err.http_status(), err.public_message())
            }
        }
    }
}
