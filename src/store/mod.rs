//! Persistent item store seam.
//!
//! The store is append-only from this crate's point of view: records are
//! created by [`put_new`](ItemStore::put_new), never mutated, never
//! deleted.
//!
//! # Duplicate-name race
//!
//! The conditional insert guards against double-insert of one identifier
//! only. Two concurrent cold lookups for the same name each generate a
//! record with a distinct fresh id, and both inserts succeed — duplicate
//! records for one logical name are possible. There is no per-key
//! in-flight lock; this is a fixed property of the pipeline, and
//! implementations must not try to "solve" it behind the seam.

mod http;
mod memory;

pub use http::HttpItemStore;
pub use memory::MemoryItemStore;

use async_trait::async_trait;

use crate::Result;
use crate::types::StoredItem;

/// Key-value item store with a secondary index on the normalized name.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Store name for logging/debugging.
    fn name(&self) -> &str;

    /// Point query by the `NameLowercase` secondary index.
    ///
    /// Returns `None` when no record matches.
    async fn find_by_name(&self, name_lowercase: &str) -> Result<Option<StoredItem>>;

    /// Conditional insert: fails with [`ShennongError::Conflict`]
    /// (500) when a record with the same id already exists.
    ///
    /// [`ShennongError::Conflict`]: crate::ShennongError::Conflict
    async fn put_new(&self, item: &StoredItem) -> Result<()>;
}
