//! Builder for configuring lookup service instances

use std::sync::Arc;

use crate::cache::{CacheConfig, LookupCache};
use crate::generate::ItemGenerator;
use crate::store::ItemStore;
use crate::{Result, ShennongError};

use super::LookupService;

/// Main entry point for creating lookup service instances.
pub struct Shennong;

impl Shennong {
    /// Create a new builder for configuring the service.
    pub fn builder() -> ShennongBuilder {
        ShennongBuilder::new()
    }
}

/// Builder for configuring lookup service instances.
///
/// The store and generator are mandatory collaborators; the cache is
/// always constructed (fresh per service instance, per the dependency-
/// injection design) and only its TTL is configurable.
pub struct ShennongBuilder {
    store: Option<Arc<dyn ItemStore>>,
    generator: Option<Arc<dyn ItemGenerator>>,
    cache: CacheConfig,
}

impl ShennongBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            generator: None,
            cache: CacheConfig::default(),
        }
    }

    /// Configure the persistent item store.
    pub fn store(mut self, store: Arc<dyn ItemStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Configure the item generator.
    pub fn generator(mut self, generator: Arc<dyn ItemGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Configure the lookup cache.
    pub fn cache_config(mut self, config: CacheConfig) -> Self {
        self.cache = config;
        self
    }

    /// Build the service.
    ///
    /// Fails with a configuration error when the store or the generator
    /// is missing.
    pub fn build(self) -> Result<LookupService> {
        let store = self
            .store
            .ok_or_else(|| ShennongError::Configuration("no item store configured".into()))?;
        let generator = self
            .generator
            .ok_or_else(|| ShennongError::Configuration("no item generator configured".into()))?;
        Ok(LookupService::new(
            store,
            generator,
            LookupCache::new(&self.cache),
        ))
    }
}

impl Default for ShennongBuilder {
    fn default() -> Self {
        Self::new()
    }
}
