//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! schemaless `Item` documents of `inventory_core`. These are testable in
//! isolation without DynamoDB access.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;
use inventory_core::inventory::{Attribute, InventoryRecord, Item, ItemKey};
use inventory_core::storage::RepositoryError;
use rust_decimal::Decimal;

/// Convert an InventoryRecord to a DynamoDB item.
pub fn record_to_item(record: &InventoryRecord) -> HashMap<String, AttributeValue> {
    record
        .to_item()
        .iter()
        .map(|(name, attribute)| (name.clone(), attribute_to_value(attribute)))
        .collect()
}

/// Convert an ItemKey to the DynamoDB primary key map.
pub fn key_to_item(key: &ItemKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("item_id".to_string(), AttributeValue::S(key.item_id.clone())),
        (
            "location_id".to_string(),
            AttributeValue::N(key.location_id.to_string()),
        ),
    ])
}

/// Convert a DynamoDB item to an Item document.
pub fn item_from_dynamo(item: &HashMap<String, AttributeValue>) -> Result<Item, RepositoryError> {
    item.iter()
        .map(|(name, value)| value_to_attribute(name, value).map(|a| (name.clone(), a)))
        .collect()
}

/// Convert an Attribute into a DynamoDB AttributeValue.
pub fn attribute_to_value(attribute: &Attribute) -> AttributeValue {
    match attribute {
        Attribute::S(s) => AttributeValue::S(s.clone()),
        Attribute::N(n) => AttributeValue::N(n.normalize().to_string()),
        Attribute::Bool(b) => AttributeValue::Bool(*b),
        Attribute::Null => AttributeValue::Null(true),
        Attribute::L(list) => AttributeValue::L(list.iter().map(attribute_to_value).collect()),
        Attribute::M(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), attribute_to_value(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB AttributeValue into an Attribute.
///
/// String and number sets come back as lists. Binary values are rejected.
pub fn value_to_attribute(name: &str, value: &AttributeValue) -> Result<Attribute, RepositoryError> {
    match value {
        AttributeValue::S(s) => Ok(Attribute::S(s.clone())),
        AttributeValue::N(n) => parse_number(name, n).map(Attribute::N),
        AttributeValue::Bool(b) => Ok(Attribute::Bool(*b)),
        AttributeValue::Null(_) => Ok(Attribute::Null),
        AttributeValue::L(list) => list
            .iter()
            .map(|v| value_to_attribute(name, v))
            .collect::<Result<Vec<_>, _>>()
            .map(Attribute::L),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| value_to_attribute(k, v).map(|a| (k.clone(), a)))
            .collect::<Result<BTreeMap<_, _>, RepositoryError>>()
            .map(Attribute::M),
        AttributeValue::Ss(set) => Ok(Attribute::L(
            set.iter().map(|s| Attribute::S(s.clone())).collect(),
        )),
        AttributeValue::Ns(set) => set
            .iter()
            .map(|n| parse_number(name, n).map(Attribute::N))
            .collect::<Result<Vec<_>, _>>()
            .map(Attribute::L),
        _ => Err(RepositoryError::Serialization(format!(
            "Unsupported attribute type for field: {}",
            name
        ))),
    }
}

fn parse_number(name: &str, n: &str) -> Result<Decimal, RepositoryError> {
    Decimal::from_str(n)
        .or_else(|_| Decimal::from_scientific(n))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number for {}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::primitives::Blob;

    use super::*;

    fn sample_record() -> InventoryRecord {
        InventoryRecord {
            item_id: "sku1".to_string(),
            location_id: 7,
            item_name: "Widget".to_string(),
            item_description: "Blue".to_string(),
            qty_on_hand: 3,
            price: Decimal::new(1999, 2),
        }
    }

    #[test]
    fn test_record_to_item() {
        let item = record_to_item(&sample_record());

        assert_eq!(item.len(), 6);
        assert_eq!(item["item_id"], AttributeValue::S("sku1".to_string()));
        assert_eq!(item["location_id"], AttributeValue::N("7".to_string()));
        assert_eq!(item["item_name"], AttributeValue::S("Widget".to_string()));
        assert_eq!(item["item_description"], AttributeValue::S("Blue".to_string()));
        assert_eq!(item["qty_on_hand"], AttributeValue::N("3".to_string()));
        assert_eq!(item["price"], AttributeValue::N("19.99".to_string()));
    }

    #[test]
    fn test_key_to_item() {
        let key = key_to_item(&ItemKey::new("sku1", 42));

        assert_eq!(key.len(), 2);
        assert_eq!(key["item_id"], AttributeValue::S("sku1".to_string()));
        assert_eq!(key["location_id"], AttributeValue::N("42".to_string()));
    }

    #[test]
    fn test_record_survives_dynamo_representation() {
        let record = sample_record();
        let item = item_from_dynamo(&record_to_item(&record)).unwrap();
        assert_eq!(item, record.to_item());
    }

    #[test]
    fn test_nested_values() {
        let value = AttributeValue::M(HashMap::from([
            (
                "dims".to_string(),
                AttributeValue::L(vec![
                    AttributeValue::N("1.5".to_string()),
                    AttributeValue::N("2".to_string()),
                ]),
            ),
            ("fragile".to_string(), AttributeValue::Bool(true)),
        ]));

        let attribute = value_to_attribute("extra", &value).unwrap();

        let Attribute::M(map) = attribute else {
            panic!("expected map attribute");
        };
        assert_eq!(
            map["dims"],
            Attribute::L(vec![
                Attribute::N(Decimal::new(15, 1)),
                Attribute::N(Decimal::from(2))
            ])
        );
        assert_eq!(map["fragile"], Attribute::Bool(true));
    }

    #[test]
    fn test_sets_become_lists() {
        let strings = AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            value_to_attribute("tags", &strings).unwrap(),
            Attribute::L(vec![Attribute::from("a"), Attribute::from("b")])
        );

        let numbers = AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]);
        assert_eq!(
            value_to_attribute("sizes", &numbers).unwrap(),
            Attribute::L(vec![
                Attribute::N(Decimal::from(1)),
                Attribute::N(Decimal::new(25, 1))
            ])
        );
    }

    #[test]
    fn test_scientific_number() {
        let attribute = value_to_attribute("n", &AttributeValue::N("1.5e2".to_string())).unwrap();
        assert_eq!(attribute, Attribute::N(Decimal::from(150)));
    }

    #[test]
    fn test_invalid_number() {
        let result = value_to_attribute("n", &AttributeValue::N("abc".to_string()));
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[test]
    fn test_binary_is_rejected() {
        let result = value_to_attribute("blob", &AttributeValue::B(Blob::new(vec![1, 2])));
        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[test]
    fn test_null_and_bool_to_value() {
        assert_eq!(attribute_to_value(&Attribute::Null), AttributeValue::Null(true));
        assert_eq!(
            attribute_to_value(&Attribute::Bool(false)),
            AttributeValue::Bool(false)
        );
    }
}
