//! Shennong - lookup-or-generate service for nutritional/TCM item metadata
//!
//! Given an item name, the service returns a structured record covering
//! modern nutrition and traditional Chinese medicine: first checking an
//! in-memory TTL cache, then a persistent store, and on a miss
//! synthesizing the record from a generative language model, validating
//! it against a closed two-stage schema, persisting it, and returning it.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shennong::{ChatCompletionGenerator, GeneratorConfig, HttpItemStore, Shennong};
//!
//! #[tokio::main]
//! async fn main() -> shennong::Result<()> {
//!     let service = Shennong::builder()
//!         .store(Arc::new(HttpItemStore::new(
//!             "https://items.example.com",
//!             Some("store-api-key"),
//!         )))
//!         .generator(Arc::new(ChatCompletionGenerator::new(
//!             Some("sk-or-your-key"),
//!             GeneratorConfig::new("anthropic/claude-sonnet-4"),
//!         )))
//!         .build()?;
//!
//!     let response = service.handle(Some("ginger")).await;
//!     println!("{} {}", response.status, response.body);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod classify;
pub mod error;
pub mod generate;
pub mod normalize;
pub mod service;
pub mod store;
pub mod telemetry;
pub mod types;
pub mod validate;

// Re-export main types at crate root
pub use error::{Result, ShennongError};
pub use service::{LookupService, Resolution, Shennong, ShennongBuilder};

pub use cache::{CacheConfig, LookupCache};
pub use generate::{ChatCompletionGenerator, GeneratorConfig, ItemGenerator};
pub use store::{HttpItemStore, ItemStore, MemoryItemStore};

// Re-export all types
pub use types::{
    ApiResponse, GeneratedItem, Ingredient, MultilingualText, Nutrient, NutrientKind, StoredItem,
    TcmProfile, ThermalNature,
};
pub use validate::{SchemaStage, Violation};
