use crate::inventory::{Attribute, Item};

/// A single-attribute equality predicate applied during a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanFilter {
    pub attribute: String,
    pub value: Attribute,
}

impl ScanFilter {
    /// Creates a filter matching items whose `attribute` equals `value`.
    pub fn eq(attribute: impl Into<String>, value: Attribute) -> Self {
        Self {
            attribute: attribute.into(),
            value,
        }
    }

    /// Creates the filter used to list the items of one location.
    pub fn location(location_id: i64) -> Self {
        Self::eq("location_id", Attribute::from(location_id))
    }

    /// Returns true if the item carries the attribute with an equal value.
    pub fn matches(&self, item: &Item) -> bool {
        item.get(&self.attribute) == Some(&self.value)
    }
}
