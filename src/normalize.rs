//! Search-term normalization and cache fingerprinting.
//!
//! [`normalize`] derives the lookup key used identically in three places:
//! the store's secondary-index query, the cache fingerprint input, and the
//! `NameLowercase` system field. All three MUST come from this one function
//! so cache, store, and fingerprint stay consistent — the key is derived
//! from the search input, never from the generated name, which keeps
//! lookups stable even when the model returns a differently-cased or
//! translated name.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Normalize a search term into the canonical lookup key:
/// trim surrounding whitespace, then lowercase.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Compute the cache fingerprint for a normalized key.
///
/// Uses `DefaultHasher` (SipHash) for a reasonable collision-resistance /
/// performance trade-off. The hash is deterministic within a process
/// lifetime, which is sufficient for an in-memory cache.
pub fn fingerprint(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}
