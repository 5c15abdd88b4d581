//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use inventory_core::inventory::{InventoryRecord, Item, ItemKey};
use inventory_core::storage::{InventoryRepository, Result, ScanFilter};

/// In-memory storage backend for testing.
///
/// Items are kept in a `BTreeMap` wrapped in `Arc<RwLock<_>>`, so scans return
/// them ordered by key. Data is not persisted and will be lost when the
/// repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<BTreeMap<ItemKey, Item>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryRepository for InMemoryRepository {
    async fn put_item(&self, record: &InventoryRecord) -> Result<()> {
        let mut items = self.items.write().await;
        items.insert(record.key(), record.to_item());
        Ok(())
    }

    async fn get_item(&self, key: &ItemKey) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn delete_item(&self, key: &ItemKey) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }

    async fn scan(&self, filter: Option<&ScanFilter>) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| filter.is_none_or(|f| f.matches(item)))
            .cloned()
            .collect())
    }
}
