//! In-memory item store for tests and embedded deployments.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::instrument;
use uuid::Uuid;

use crate::types::StoredItem;
use crate::{Result, ShennongError};

use super::ItemStore;

/// Concurrent-map store: records keyed by id, with a `NameLowercase`
/// index for the secondary lookup.
///
/// The name index is last-write-wins: when the duplicate-name race (see
/// the [module docs](super)) persists two records for one name, lookups
/// return whichever insert indexed last. Both records remain in the
/// primary map.
#[derive(Default)]
pub struct MemoryItemStore {
    items: DashMap<Uuid, StoredItem>,
    by_name: DashMap<String, Uuid>,
}

impl MemoryItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn find_by_name(&self, name_lowercase: &str) -> Result<Option<StoredItem>> {
        let Some(id) = self.by_name.get(name_lowercase).map(|entry| *entry) else {
            return Ok(None);
        };
        Ok(self.items.get(&id).map(|entry| entry.clone()))
    }

    #[instrument(name = "store.put_new", skip(self, item), fields(id = %item.id))]
    async fn put_new(&self, item: &StoredItem) -> Result<()> {
        match self.items.entry(item.id) {
            Entry::Occupied(_) => return Err(ShennongError::Conflict(item.id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(item.clone());
            }
        }
        self.by_name
            .insert(item.name_lowercase.clone(), item.id);
        Ok(())
    }
}
