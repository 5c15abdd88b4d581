//! Schemaless item documents as read back from the store.
//!
//! Every number is held as an exact [`Decimal`]. Converting a document to JSON
//! for transport is where decimals become floats, and [`DecimalConversion`]
//! controls how deep that conversion goes.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

/// A stored item: attribute name to attribute value.
pub type Item = BTreeMap<String, Attribute>;

/// A single attribute value in a stored item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    S(String),
    N(Decimal),
    Bool(bool),
    Null,
    L(Vec<Attribute>),
    M(BTreeMap<String, Attribute>),
}

impl Attribute {
    /// Returns the string value, if this is a string attribute.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Attribute::S(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a number attribute.
    pub fn as_n(&self) -> Option<&Decimal> {
        match self {
            Attribute::N(n) => Some(n),
            _ => None,
        }
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Attribute::S(value.to_string())
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Attribute::S(value)
    }
}

impl From<i64> for Attribute {
    fn from(value: i64) -> Self {
        Attribute::N(Decimal::from(value))
    }
}

impl From<Decimal> for Attribute {
    fn from(value: Decimal) -> Self {
        Attribute::N(value)
    }
}

/// How far decimal-to-float conversion reaches into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalConversion {
    /// Every number, including those nested in lists and maps, becomes a float.
    Recursive,
    /// Only numbers directly on the item become floats. Nested numbers keep
    /// their exact decimal text.
    TopLevel,
}

/// Converts a stored item into a JSON object.
pub fn item_to_json(item: &Item, conversion: DecimalConversion) -> Value {
    let nested = conversion == DecimalConversion::Recursive;
    let object: Map<String, Value> = item
        .iter()
        .map(|(name, attribute)| {
            let value = match attribute {
                Attribute::N(n) => decimal_to_float(n),
                other => attribute_to_json(other, nested),
            };
            (name.clone(), value)
        })
        .collect();

    Value::Object(object)
}

/// Converts a list of stored items into a JSON array.
pub fn items_to_json(items: &[Item], conversion: DecimalConversion) -> Value {
    Value::Array(
        items
            .iter()
            .map(|item| item_to_json(item, conversion))
            .collect(),
    )
}

fn attribute_to_json(attribute: &Attribute, convert_decimals: bool) -> Value {
    match attribute {
        Attribute::S(s) => Value::String(s.clone()),
        Attribute::N(n) if convert_decimals => decimal_to_float(n),
        Attribute::N(n) => Value::String(n.to_string()),
        Attribute::Bool(b) => Value::Bool(*b),
        Attribute::Null => Value::Null,
        Attribute::L(list) => Value::Array(
            list.iter()
                .map(|a| attribute_to_json(a, convert_decimals))
                .collect(),
        ),
        Attribute::M(map) => Value::Object(
            map.iter()
                .map(|(k, a)| (k.clone(), attribute_to_json(a, convert_decimals)))
                .collect(),
        ),
    }
}

fn decimal_to_float(n: &Decimal) -> Value {
    n.to_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
