use rust_decimal::Decimal;

use super::document::{Attribute, Item};

/// Composite primary key of an inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
    pub item_id: String,
    pub location_id: i64,
}

impl ItemKey {
    pub fn new(item_id: impl Into<String>, location_id: i64) -> Self {
        Self {
            item_id: item_id.into(),
            location_id,
        }
    }
}

/// An inventory record, as written by the create handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub item_id: String,
    pub location_id: i64,
    pub item_name: String,
    pub item_description: String,
    pub qty_on_hand: i64,
    pub price: Decimal,
}

impl InventoryRecord {
    /// Returns the composite key of this record.
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.item_id.clone(), self.location_id)
    }

    /// Converts the record into the document stored in the table.
    pub fn to_item(&self) -> Item {
        let mut item = Item::new();
        item.insert("item_id".to_string(), Attribute::from(self.item_id.as_str()));
        item.insert("location_id".to_string(), Attribute::from(self.location_id));
        item.insert(
            "item_name".to_string(),
            Attribute::from(self.item_name.as_str()),
        );
        item.insert(
            "item_description".to_string(),
            Attribute::from(self.item_description.as_str()),
        );
        item.insert("qty_on_hand".to_string(), Attribute::from(self.qty_on_hand));
        item.insert("price".to_string(), Attribute::N(self.price));
        item
    }
}
