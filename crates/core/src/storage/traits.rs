use async_trait::async_trait;

use crate::inventory::{InventoryRecord, Item, ItemKey};

use super::{Result, ScanFilter};

/// Repository for inventory records, keyed by `(item_id, location_id)`.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Writes a record, replacing any record stored under the same key.
    async fn put_item(&self, record: &InventoryRecord) -> Result<()>;

    /// Gets the item stored under a composite key.
    async fn get_item(&self, key: &ItemKey) -> Result<Option<Item>>;

    /// Deletes the item stored under a composite key.
    ///
    /// Deleting a key that has no item is not an error.
    async fn delete_item(&self, key: &ItemKey) -> Result<()>;

    /// Reads every item in the table, optionally keeping only those that match `filter`.
    async fn scan(&self, filter: Option<&ScanFilter>) -> Result<Vec<Item>>;
}
